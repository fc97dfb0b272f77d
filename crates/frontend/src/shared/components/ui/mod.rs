pub mod button;
pub mod dropdown;
pub mod input;

pub use button::Button;
pub use dropdown::Dropdown;
pub use input::Input;
