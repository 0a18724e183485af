pub mod cancellation;
pub mod generate_pixel_buffer;
pub mod run_games_parallel;
