use super::constants::MOBILE_AGENT_TOKENS;

/// Where the scene's input signal comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputSource {
    /// `deviceorientation` tilt (phones, tablets)
    Orientation,
    /// `mousemove` position (desktop)
    Pointer,
}

impl InputSource {
    #[inline]
    pub fn select(orientation_supported: bool) -> Self {
        if orientation_supported {
            InputSource::Orientation
        } else {
            InputSource::Pointer
        }
    }
}

#[inline]
pub fn is_mobile_user_agent(user_agent: &str) -> bool {
    let ua = user_agent.to_ascii_lowercase();
    MOBILE_AGENT_TOKENS.iter().any(|t| ua.contains(t))
}
