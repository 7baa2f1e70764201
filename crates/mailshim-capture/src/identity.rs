//! Invoking-identity resolution.

/// The identity that invoked the shim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// OS user id as a decimal string.
    pub user_id: String,
    /// Human-readable name, when resolvable.
    pub username: Option<String>,
}

/// Capability for resolving the invoking identity.
///
/// Resolution never fails: implementations must always produce a user id and
/// may degrade to `username: None` when the name lookup is unavailable.
pub trait IdentitySource {
    /// Resolve the current identity.
    fn resolve(&self) -> Identity;
}

/// Production identity source backed by the OS.
///
/// The user id comes from the process owner and is always available. The
/// username lookup is independent and best-effort; a failed lookup silently
/// degrades to id-only rather than failing the invocation.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsIdentity;

impl IdentitySource for OsIdentity {
    fn resolve(&self) -> Identity {
        Identity {
            user_id: process_uid(),
            username: whoami::fallible::username()
                .ok()
                .filter(|name| !name.is_empty()),
        }
    }
}

#[cfg(unix)]
fn process_uid() -> String {
    // Safety: getuid has no failure modes and touches no memory.
    unsafe { libc::getuid() }.to_string()
}

#[cfg(not(unix))]
fn process_uid() -> String {
    // No numeric uid concept off unix; the shim targets unix MTAs.
    "0".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_os_identity_always_has_uid() {
        let identity = OsIdentity.resolve();
        assert!(!identity.user_id.is_empty());
        assert!(identity.user_id.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_degraded_identity_keeps_uid_only() {
        // Stand-in for an environment where the name lookup fails.
        struct IdOnly;
        impl IdentitySource for IdOnly {
            fn resolve(&self) -> Identity {
                Identity {
                    user_id: "123".to_string(),
                    username: None,
                }
            }
        }
        let identity = IdOnly.resolve();
        assert_eq!(identity.user_id, "123");
        assert_eq!(identity.username, None);
    }
}
