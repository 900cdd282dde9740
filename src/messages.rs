// Wire message shared by controller and drive unit

use std::fmt;

/// Target speeds for the three wheel motors, degrees per second.
/// Zero means stop the motor rather than hold it at speed zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WheelSpeeds {
    pub left: i16,
    pub right: i16,
    pub rear: i16,
}

impl WheelSpeeds {
    pub fn new(left: i16, right: i16, rear: i16) -> Self {
        Self { left, right, rear }
    }

    /// All motors stopped
    pub fn stop() -> Self {
        Self::default()
    }

    /// Returns speeds as array [left, right, rear]
    pub fn as_array(&self) -> [i16; 3] {
        [self.left, self.right, self.rear]
    }

    /// Wire format: three decimal integers joined by single spaces
    pub fn encode(&self) -> String {
        format!("{} {} {}", self.left, self.right, self.rear)
    }

    /// Parse a wire line. Anything other than exactly three integer
    /// tokens is a `DecodeError`; no partial result is ever produced.
    pub fn decode(line: &str) -> Result<Self, DecodeError> {
        let mut tokens = line.split_whitespace();

        let mut next = |field: &'static str| -> Result<i16, DecodeError> {
            let token = tokens.next().ok_or(DecodeError::MissingField { field })?;
            token.parse().map_err(|_| DecodeError::BadInteger {
                field,
                token: token.to_string(),
            })
        };

        let left = next("left")?;
        let right = next("right")?;
        let rear = next("rear")?;

        if let Some(extra) = tokens.next() {
            return Err(DecodeError::TrailingToken {
                token: extra.to_string(),
            });
        }

        Ok(Self { left, right, rear })
    }
}

impl fmt::Display for WheelSpeeds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "left={} right={} rear={}",
            self.left, self.right, self.rear
        )
    }
}

/// Malformed wire message
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("missing {field} speed field")]
    MissingField { field: &'static str },

    #[error("{field} speed {token:?} is not an integer")]
    BadInteger { field: &'static str, token: String },

    #[error("unexpected trailing token {token:?}")]
    TrailingToken { token: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let speeds = WheelSpeeds::new(-866, 866, 0);
        let line = speeds.encode();
        assert_eq!(line, "-866 866 0");
        assert_eq!(WheelSpeeds::decode(&line).unwrap(), speeds);
    }

    #[test]
    fn test_two_tokens_is_an_error() {
        let err = WheelSpeeds::decode("12 34").unwrap_err();
        assert!(matches!(err, DecodeError::MissingField { field: "rear" }));
    }

    #[test]
    fn test_non_numeric_token_is_an_error() {
        let err = WheelSpeeds::decode("12 fast 34").unwrap_err();
        assert!(matches!(
            err,
            DecodeError::BadInteger { field: "right", .. }
        ));
    }

    #[test]
    fn test_four_tokens_is_an_error() {
        let err = WheelSpeeds::decode("1 2 3 4").unwrap_err();
        assert!(matches!(err, DecodeError::TrailingToken { .. }));
    }

    #[test]
    fn test_empty_line_is_an_error() {
        assert!(WheelSpeeds::decode("").is_err());
    }

    #[test]
    fn test_negative_speeds_decode() {
        let speeds = WheelSpeeds::decode("-1000 -150 -1").unwrap();
        assert_eq!(speeds, WheelSpeeds::new(-1000, -150, -1));
    }
}
