pub mod add;
pub mod remove;
pub mod set_amount;
pub mod show;
