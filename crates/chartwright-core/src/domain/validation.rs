use crate::domain::{
    entities::{Application, ApplicationSet},
    error::DomainError,
};

/// Longest accepted chart or application name.
///
/// Lower than the limits of common filesystems and of the Kubernetes name
/// fields the generated manifests end up in.
pub const MAX_NAME_LENGTH: usize = 250;

/// Check a chart or application name.
///
/// A name is valid when it is 1 to [`MAX_NAME_LENGTH`] characters long and
/// every character is in `[A-Za-z0-9._-]`.
pub fn validate_name(name: &str) -> Result<(), DomainError> {
    let length = name.chars().count();
    if length == 0 || length > MAX_NAME_LENGTH {
        return Err(DomainError::InvalidName {
            name: name.to_string(),
            reason: format!("must be between 1 and {MAX_NAME_LENGTH} characters"),
        });
    }

    if let Some(bad) = name.chars().find(|c| !is_name_char(*c)) {
        return Err(DomainError::InvalidName {
            name: name.to_string(),
            reason: format!("character {bad:?} is not allowed, use [A-Za-z0-9._-]"),
        });
    }

    Ok(())
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-')
}

/// Check a chart version: `MAJOR.MINOR.PATCH` with an optional `-pre` and/or
/// `+build` suffix.
pub fn validate_version(version: &str) -> Result<(), DomainError> {
    let invalid = |reason: &str| DomainError::InvalidVersion {
        version: version.to_string(),
        reason: reason.to_string(),
    };

    let (core, build) = match version.split_once('+') {
        Some((core, build)) => (core, Some(build)),
        None => (version, None),
    };
    let (core, pre) = match core.split_once('-') {
        Some((core, pre)) => (core, Some(pre)),
        None => (core, None),
    };

    let parts: Vec<&str> = core.split('.').collect();
    if parts.len() != 3 {
        return Err(invalid("expected MAJOR.MINOR.PATCH"));
    }
    if parts
        .iter()
        .any(|p| p.is_empty() || !p.chars().all(|c| c.is_ascii_digit()))
    {
        return Err(invalid("version components must be numeric"));
    }

    for suffix in [pre, build].into_iter().flatten() {
        let well_formed = !suffix.is_empty()
            && suffix.split('.').all(|ident| {
                !ident.is_empty() && ident.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
            });
        if !well_formed {
            return Err(invalid("malformed pre-release or build suffix"));
        }
    }

    Ok(())
}

/// Centralized domain validation.
///
/// Validation is per entity: the engine checks each application right
/// before touching the filesystem on its behalf.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_application(app: &Application) -> Result<(), DomainError> {
        validate_name(app.name())
    }

    /// Validates the set's own name and version, not its applications.
    pub fn validate_application_set(set: &ApplicationSet) -> Result<(), DomainError> {
        validate_name(set.name())?;
        validate_version(set.version())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_typical_names() {
        for name in ["demo", "app1", "my-app", "api_v2", "a.b.c", "A"] {
            assert!(validate_name(name).is_ok(), "rejected {name}");
        }
    }

    #[test]
    fn rejects_empty_name() {
        assert!(matches!(
            validate_name(""),
            Err(DomainError::InvalidName { .. })
        ));
    }

    #[test]
    fn length_boundary() {
        assert!(validate_name(&"a".repeat(MAX_NAME_LENGTH)).is_ok());
        assert!(validate_name(&"a".repeat(MAX_NAME_LENGTH + 1)).is_err());
    }

    #[test]
    fn rejects_characters_outside_set() {
        for name in ["bad name!", "a/b", "a b", "chart$", "na\u{e9}me", "x\n"] {
            assert!(
                matches!(validate_name(name), Err(DomainError::InvalidName { .. })),
                "accepted {name:?}"
            );
        }
    }

    #[test]
    fn reason_names_the_offending_character() {
        let err = validate_name("bad name!").unwrap_err();
        assert!(err.to_string().contains("' '"));
    }

    #[test]
    fn versions() {
        for ok in ["0.1.0", "1.16.0", "2.0.0-rc.1", "1.0.0+build.5", "1.0.0-alpha+001"] {
            assert!(validate_version(ok).is_ok(), "rejected {ok}");
        }
        for bad in ["", "1", "1.0", "1.0.0.0", "v1.0.0", "1.x.0", "1.0.0-", "1.0.0+"] {
            assert!(
                matches!(validate_version(bad), Err(DomainError::InvalidVersion { .. })),
                "accepted {bad}"
            );
        }
    }
}
