//! Session startup helpers.

use pipes_core::{Options, Result, Scene};
use rand::Rng;

use crate::screensaver::Screensaver;

/// Installs the `env_logger` backend for the `log` facade.
///
/// Filtering follows `RUST_LOG`. Safe to call more than once; later calls
/// leave the installed logger in place.
pub fn init_logging() {
    let _ = env_logger::try_init();
}

/// Starts a session from a JSON options object.
///
/// Installs logging, parses and validates `options_json` (an empty string
/// means the defaults) and builds the [`Screensaver`].
///
/// # Example
///
/// ```no_run
/// use pipes::*;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// fn main() -> Result<()> {
///     let mut saver = start(
///         r#"{"joints": "ball", "interval": [5, 10]}"#,
///         RecordingScene::new(),
///         StdRng::seed_from_u64(1),
///     )?;
///     saver.frame(std::time::Duration::from_millis(16));
///     Ok(())
/// }
/// ```
pub fn start<S: Scene, R: Rng>(options_json: &str, scene: S, rng: R) -> Result<Screensaver<S, R>> {
    init_logging();
    let options = Options::from_json(options_json)?;
    Screensaver::new(options, scene, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headless::RecordingScene;
    use pipes_core::{JointStyle, PipesError};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_init_logging_is_idempotent() {
        init_logging();
        init_logging();
    }

    #[test]
    fn test_start_parses_options() {
        let saver = start(
            r#"{"multiple": false, "joints": "elbow", "hideUI": true}"#,
            RecordingScene::new(),
            StdRng::seed_from_u64(3),
        )
        .unwrap();
        assert!(!saver.options().multiple);
        assert_eq!(saver.options().joints, JointStyle::Elbow);
        assert!(saver.options().hide_ui);
    }

    #[test]
    fn test_start_reports_bad_json() {
        let result = start("[1, 2]", RecordingScene::new(), StdRng::seed_from_u64(3));
        assert!(matches!(result, Err(PipesError::InvalidOptions(_))));

        let result = start(r#"{"joints": "zigzag"}"#, RecordingScene::new(), StdRng::seed_from_u64(3));
        assert!(matches!(result, Err(PipesError::JsonError(_))));
    }
}
