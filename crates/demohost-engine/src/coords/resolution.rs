use core::fmt;

/// Screen resolution in physical pixels.
///
/// Dimensions are signed because hosts report `0` or negative sizes while a
/// window is minimized or the render surface has not been created yet.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct ScreenResolution {
    pub width: i32,
    pub height: i32,
}

impl ScreenResolution {
    #[inline]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { width: 0, height: 0 }
    }

    /// Returns `true` when both dimensions are strictly positive.
    #[inline]
    pub const fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

impl fmt::Display for ScreenResolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl From<(i32, i32)> for ScreenResolution {
    #[inline]
    fn from((width, height): (i32, i32)) -> Self {
        Self::new(width, height)
    }
}
