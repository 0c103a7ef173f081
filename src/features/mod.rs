pub mod contact;
pub mod people;
