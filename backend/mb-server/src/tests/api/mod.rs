mod error;
mod extractors;
mod lms;
mod user_dto;
