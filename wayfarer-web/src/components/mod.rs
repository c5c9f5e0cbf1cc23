pub mod chat_panel;
pub mod daisy_ui;
pub mod day_card;
pub mod footer;
pub mod header;
