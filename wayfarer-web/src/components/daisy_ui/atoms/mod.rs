pub mod alert;
pub mod badge;
pub mod input;
pub mod rating;
pub mod select;
pub mod textarea;

pub use alert::{Alert, AlertProps};
pub use badge::{Badge, BadgeProps};
pub use input::{Input, InputProps};
pub use rating::{Rating, RatingProps};
pub use select::{Select, SelectOption, SelectProps};
pub use textarea::{Textarea, TextareaProps};
