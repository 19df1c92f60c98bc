/// Validates an application base name.
///
/// Checks:
/// - Non-empty
/// - Starts with an ASCII letter
/// - Remaining characters are ASCII alphanumeric, '-' or '_'
/// - Ends with an ASCII alphanumeric
pub fn validate_base_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {}
        _ => return false,
    }
    if name.ends_with(['-', '_']) {
        return false;
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Validates a namespace as an RFC 1123 label.
pub fn validate_namespace(namespace: &str) -> bool {
    if namespace.is_empty() || namespace.len() > 63 {
        return false;
    }
    if namespace.starts_with('-') || namespace.ends_with('-') {
        return false;
    }
    namespace.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

/// Validates an image tag.
pub fn validate_image_tag(tag: &str) -> bool {
    if tag.is_empty() || tag.len() > 128 {
        return false;
    }
    if tag.starts_with('.') || tag.starts_with('-') {
        return false;
    }
    tag.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.' || c == '-')
}

/// Validates an image repository reference such as `acme`, `acme/team`
/// or `registry.example.com:5000/acme`.
///
/// Returns the reason on failure.
pub fn validate_repository_name(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("must not be empty".to_string());
    }
    if name.starts_with('/') || name.ends_with('/') {
        return Err("must not start or end with '/'".to_string());
    }

    let mut components = name.split('/').peekable();
    if let Some(first) = components.peek().copied()
        && looks_like_registry_host(first)
        && name.contains('/')
    {
        validate_registry_host(first)?;
        components.next();
    }

    for component in components {
        if !validate_path_component(component) {
            return Err(format!(
                "path component '{}' must be lowercase alphanumerics separated by '.', '_', '__' or '-'",
                component
            ));
        }
    }
    Ok(())
}

fn looks_like_registry_host(component: &str) -> bool {
    component.contains('.') || component.contains(':') || component == "localhost"
}

fn validate_registry_host(host: &str) -> Result<(), String> {
    let (hostname, port) = match host.split_once(':') {
        Some((hostname, port)) => (hostname, Some(port)),
        None => (host, None),
    };

    let hostname_ok = !hostname.is_empty()
        && !hostname.starts_with(['.', '-'])
        && !hostname.ends_with(['.', '-'])
        && hostname.chars().all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-');
    if !hostname_ok {
        return Err(format!("registry host '{}' is not a valid hostname", hostname));
    }

    if let Some(port) = port
        && (port.is_empty() || !port.chars().all(|c| c.is_ascii_digit()))
    {
        return Err(format!("registry port '{}' must be numeric", port));
    }
    Ok(())
}

/// `[a-z0-9]+((\.|_|__|-+)[a-z0-9]+)*`
fn validate_path_component(component: &str) -> bool {
    if component.is_empty() {
        return false;
    }
    let bytes = component.as_bytes();
    let is_alnum = |b: u8| b.is_ascii_lowercase() || b.is_ascii_digit();
    if !is_alnum(bytes[0]) || !is_alnum(bytes[bytes.len() - 1]) {
        return false;
    }

    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if is_alnum(b) {
            i += 1;
            continue;
        }
        let start = i;
        while i < bytes.len() && !is_alnum(bytes[i]) {
            i += 1;
        }
        let separator = &component[start..i];
        let valid = separator == "."
            || separator == "_"
            || separator == "__"
            || separator.chars().all(|c| c == '-');
        if !valid {
            return false;
        }
    }
    true
}

#[macro_export]
macro_rules! impl_validated_id {
    ($name:ident, $validator:path, $err_variant:path) => {
        impl $name {
            /// Validate and create a new instance.
            pub fn new(id: &str) -> Result<Self, $crate::domain::AppError> {
                if $validator(id) { Ok(Self(id.to_string())) } else { Err($err_variant(id.to_string())) }
            }

            /// Return the inner string value.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::ops::Deref for $name {
            type Target = str;
            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}
