/// How the embedded panel is opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InvocationMethod {
    /// Floating action button: trigger visible, gesture signal stopped.
    #[default]
    Fab,
    /// Shake gesture: trigger hidden, gesture signal running.
    ShakeGesture,
    /// Programmatic only: trigger hidden, gesture signal stopped.
    Manual,
}

impl InvocationMethod {
    /// Maps a raw integer coming from a host config or wire value.
    /// Unknown values fall back to `Manual` (trigger hidden, signal stopped)
    /// instead of failing.
    pub fn from_raw(raw: i32) -> Self {
        match raw {
            0 => InvocationMethod::Fab,
            1 => InvocationMethod::ShakeGesture,
            _ => InvocationMethod::Manual,
        }
    }

    pub fn as_raw(self) -> i32 {
        match self {
            InvocationMethod::Fab => 0,
            InvocationMethod::ShakeGesture => 1,
            InvocationMethod::Manual => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_values_round_trip() {
        for method in [
            InvocationMethod::Fab,
            InvocationMethod::ShakeGesture,
            InvocationMethod::Manual,
        ] {
            assert_eq!(InvocationMethod::from_raw(method.as_raw()), method);
        }
    }

    #[test]
    fn unknown_raw_values_fall_back_to_manual() {
        assert_eq!(InvocationMethod::from_raw(3), InvocationMethod::Manual);
        assert_eq!(InvocationMethod::from_raw(-1), InvocationMethod::Manual);
        assert_eq!(InvocationMethod::from_raw(i32::MAX), InvocationMethod::Manual);
    }

    #[test]
    fn default_is_fab() {
        assert_eq!(InvocationMethod::default(), InvocationMethod::Fab);
    }
}
