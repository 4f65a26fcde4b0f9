pub mod u501_learning_modules;
