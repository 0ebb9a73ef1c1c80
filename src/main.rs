use clap::Parser;
use fan_quiz::{Args, Config, Quiz, QuizError, init_file_logger};

#[tokio::main]
async fn main() {
    let config = Config::from(Args::parse());

    if let Err(e) = run(config).await {
        eprintln!("Error running quiz: {}", e);
        std::process::exit(1);
    }
}

async fn run(config: Config) -> Result<(), QuizError> {
    if let Some(path) = &config.log_file {
        init_file_logger(path, config.log_level)?;
    }

    let quiz = Quiz::builtin(&config)?;
    quiz.run().await
}
