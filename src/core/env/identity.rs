use std::env;

/// Login name variables, checked in order.
const USER_VARS: [&str; 4] = ["LOGNAME", "USER", "LNAME", "USERNAME"];

const FALLBACK_USER: &str = "user";
const FALLBACK_HOST: &str = "localhost";

/// Who is running the emulator and where.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserIdentity {
    user: String,
    host: String,
}

impl UserIdentity {
    pub fn new(user: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            host: host.into(),
        }
    }

    /// Resolves the identity of the current process.
    pub fn current() -> Self {
        Self::resolve_with(|name| env::var(name).ok())
    }

    /// Resolves the identity using `lookup` in place of the process
    /// environment. The password database and host name still come from
    /// the system.
    pub fn resolve_with<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let user = USER_VARS
            .iter()
            .filter_map(|var| lookup(var))
            .find(|value| !value.is_empty())
            .or_else(sys::passwd_user_name)
            .unwrap_or_else(|| FALLBACK_USER.to_string());
        let host = sys::host_name().unwrap_or_else(|| FALLBACK_HOST.to_string());

        log::debug!("resolved identity {}@{}", user, host);
        Self { user, host }
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn host(&self) -> &str {
        &self.host
    }
}

#[cfg(unix)]
mod sys {
    use std::ffi::CStr;

    pub fn passwd_user_name() -> Option<String> {
        let mut buf = vec![0 as libc::c_char; 4096];
        // SAFETY: passwd is plain old data; getpwuid_r fills it in
        let mut pwd: libc::passwd = unsafe { std::mem::zeroed() };
        let mut result: *mut libc::passwd = std::ptr::null_mut();

        // SAFETY: all pointers are valid for the duration of the call and
        // buf.len() is the real capacity of buf
        let rc = unsafe {
            libc::getpwuid_r(
                libc::getuid(),
                &mut pwd,
                buf.as_mut_ptr(),
                buf.len(),
                &mut result,
            )
        };
        if rc != 0 || result.is_null() || pwd.pw_name.is_null() {
            return None;
        }

        // SAFETY: pw_name points into buf and is NUL terminated
        let name = unsafe { CStr::from_ptr(pwd.pw_name) };
        Some(name.to_string_lossy().into_owned()).filter(|n| !n.is_empty())
    }

    pub fn host_name() -> Option<String> {
        let mut buf = [0u8; 256];
        // SAFETY: buf is writable for buf.len() bytes
        let rc = unsafe { libc::gethostname(buf.as_mut_ptr().cast(), buf.len()) };
        if rc != 0 {
            return None;
        }

        let end = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
        let name = String::from_utf8_lossy(&buf[..end]).into_owned();
        Some(name).filter(|n| !n.is_empty())
    }
}

#[cfg(not(unix))]
mod sys {
    pub fn passwd_user_name() -> Option<String> {
        None
    }

    pub fn host_name() -> Option<String> {
        None
    }
}
