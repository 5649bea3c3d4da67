use super::Color;

/// Named colors shared by the built-in widgets.
///
/// Widgets take a `&Theme` at build time; callers can restyle individual
/// elements afterwards through the usual `style` builders.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub background: Color,
    pub surface: Color,
    pub foreground: Color,
    pub muted: Color,
    pub border: Color,
    pub accent: Color,
    pub success: Color,
}

impl Theme {
    pub const fn dark() -> Self {
        Self {
            background: Color::Oklch { l: 0.14, c: 0.01, h: 250.0 },
            surface: Color::Oklch { l: 0.22, c: 0.02, h: 250.0 },
            foreground: Color::Oklch { l: 0.93, c: 0.01, h: 250.0 },
            muted: Color::Oklch { l: 0.62, c: 0.02, h: 250.0 },
            border: Color::Oklch { l: 0.42, c: 0.02, h: 250.0 },
            accent: Color::Oklch { l: 0.72, c: 0.12, h: 250.0 },
            success: Color::Oklch { l: 0.72, c: 0.17, h: 145.0 },
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
