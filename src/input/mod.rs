pub mod keypad;

pub use keypad::intent_for_key;
