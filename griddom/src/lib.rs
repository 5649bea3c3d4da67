pub use crossterm;

pub mod buffer;
pub mod button;
pub mod checkbox;
pub mod element;
pub mod event;
pub mod focus;
pub mod grid;
pub mod hit;
pub mod layout;
pub mod messages;
pub mod render;
pub mod status;
pub mod terminal;
pub mod text;
pub mod types;

pub use buffer::Buffer;
pub use button::Button;
pub use checkbox::Checkbox;
pub use element::{find_element, Content, Element};
pub use event::{Event, Key, Modifiers, MouseButton};
pub use focus::{collect_focusable, FocusState, NavDirection};
pub use grid::{Column, DataGrid, GridState, Record, Topbar};
pub use hit::{hit_test, hit_test_focusable};
pub use layout::{LayoutResult, Rect};
pub use messages::{create_message, Messages};
pub use status::Status;
pub use terminal::Terminal;
pub use types::*;
