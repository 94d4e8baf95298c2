//! Live adapter for the `IdGenerator` port.

use chrono::Utc;
use uuid::Uuid;

use crate::ports::IdGenerator;

/// Live ID generator producing `<unix millis>-<uuid v4>` ids.
///
/// The timestamp keeps ids roughly ordered by creation time and the random
/// UUID makes collisions practically impossible.
pub struct LiveIdGenerator;

impl IdGenerator for LiveIdGenerator {
    fn generate_id(&self) -> String {
        format!("{}-{}", Utc::now().timestamp_millis(), Uuid::new_v4().simple())
    }
}
