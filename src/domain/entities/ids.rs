//! Identifier newtypes for server-side records.

use serde::{Deserialize, Serialize};

macro_rules! record_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $name {
            #[must_use]
            pub const fn as_i64(self) -> i64 {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }
    };
}

record_id!(
    /// Meeting primary key.
    MeetingId
);
record_id!(
    /// Note primary key.
    NoteId
);
record_id!(
    /// Attendee primary key.
    AttendeeId
);
record_id!(
    /// User primary key.
    UserId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_transparent_numbers() {
        assert_eq!(serde_json::to_string(&MeetingId(7)).unwrap(), "7");
        let id: NoteId = serde_json::from_str("42").unwrap();
        assert_eq!(id, NoteId(42));
        assert_eq!(AttendeeId::from(3).to_string(), "3");
    }
}
