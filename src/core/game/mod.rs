pub mod chaos_game;
