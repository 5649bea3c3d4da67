//! Display message templates.
//!
//! Messages go through [`create_message`] so templates can later be
//! swapped per locale; for now there is a single locale's literals.

/// Build a message from a template function and its arguments.
pub fn create_message<A, F>(message: F, args: A) -> String
where
    F: FnOnce(A) -> String,
{
    message(args)
}

pub struct Messages;

impl Messages {
    /// Selection count summary; a zero count reads "None selected".
    pub fn selected(count: usize) -> String {
        let count = if count > 0 {
            count.to_string()
        } else {
            "None".to_string()
        };
        format!("{count} selected")
    }

    pub fn download() -> String {
        "Download selected".to_string()
    }
}
