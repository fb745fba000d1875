pub mod runner;
pub mod seeder;
