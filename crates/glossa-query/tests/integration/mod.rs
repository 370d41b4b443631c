mod loading;
mod scenario;
