use crate::cursor::Cursor;
use crate::logger::LogSettings;

/// Close `cursor`, discarding any error.
///
/// A failure is reported on the `cursorx::close` target at
/// [`LogSettings::close_errors_level`] and then dropped; it never reaches the caller.
pub fn close_quietly<C>(cursor: &mut C, settings: &LogSettings)
where
    C: Cursor + ?Sized,
{
    if let Err(error) = cursor.close() {
        log_at!(
            target: "cursorx::close",
            settings.close_errors_level,
            %error,
            "ignoring error while closing cursor"
        );
    }
}
