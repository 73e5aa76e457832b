#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColourMapKinds {
    #[default]
    TwoToneGradient,
    SmoothHue,
}

impl ColourMapKinds {
    pub const ALL: &'static [Self] = &[Self::TwoToneGradient, Self::SmoothHue];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::TwoToneGradient => "Two-tone gradient",
            Self::SmoothHue => "Smooth hue",
        }
    }
}

impl std::fmt::Display for ColourMapKinds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}
