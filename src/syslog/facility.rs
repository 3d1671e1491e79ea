use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use std::fmt::{self, Display};
use std::str::FromStr;

use crate::types::Severity;
use crate::{Error, ErrorKind};

/// A syslog facility: the numeric category tag carried by every frame,
/// independent of severity.
///
/// # Examples
///
/// The default value:
///
/// ```
/// use logwire::syslog::Facility;
///
/// assert_eq!(Facility::default(), Facility::User);
/// assert_eq!(Facility::default().code(), 1);
/// ```
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum Facility {
    Kern,
    User,
    Mail,
    Daemon,
    Auth,
    Syslog,
    Lpr,
    News,
    Uucp,
    Cron,
    AuthPriv,
    Ftp,
    Local0,
    Local1,
    Local2,
    Local3,
    Local4,
    Local5,
    Local6,
    Local7,
}

impl Facility {
    /// Returns the numeric facility code defined by the syslog protocol.
    pub fn code(self) -> u8 {
        match self {
            Facility::Kern => 0,
            Facility::User => 1,
            Facility::Mail => 2,
            Facility::Daemon => 3,
            Facility::Auth => 4,
            Facility::Syslog => 5,
            Facility::Lpr => 6,
            Facility::News => 7,
            Facility::Uucp => 8,
            Facility::Cron => 9,
            Facility::AuthPriv => 10,
            Facility::Ftp => 11,
            Facility::Local0 => 16,
            Facility::Local1 => 17,
            Facility::Local2 => 18,
            Facility::Local3 => 19,
            Facility::Local4 => 20,
            Facility::Local5 => 21,
            Facility::Local6 => 22,
            Facility::Local7 => 23,
        }
    }

    /// Computes the priority value of a frame tagged with this facility.
    ///
    /// # Examples
    ///
    /// ```
    /// use logwire::syslog::Facility;
    /// use logwire::types::Severity;
    ///
    /// assert_eq!(Facility::User.priority(Severity::Error), 11);
    /// ```
    pub fn priority(self, severity: Severity) -> u8 {
        self.code() * 8 + severity.syslog_code()
    }

    /// Gets the name of this `Facility`, in lowercase.
    pub fn name(self) -> &'static str {
        match self {
            Facility::Kern => "kern",
            Facility::User => "user",
            Facility::Mail => "mail",
            Facility::Daemon => "daemon",
            Facility::Auth => "auth",
            Facility::Syslog => "syslog",
            Facility::Lpr => "lpr",
            Facility::News => "news",
            Facility::Uucp => "uucp",
            Facility::Cron => "cron",
            Facility::AuthPriv => "authpriv",
            Facility::Ftp => "ftp",
            Facility::Local0 => "local0",
            Facility::Local1 => "local1",
            Facility::Local2 => "local2",
            Facility::Local3 => "local3",
            Facility::Local4 => "local4",
            Facility::Local5 => "local5",
            Facility::Local6 => "local6",
            Facility::Local7 => "local7",
        }
    }
}

impl Default for Facility {
    fn default() -> Self {
        Facility::User
    }
}

impl Display for Facility {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Facility {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "kern" => Ok(Facility::Kern),
            "user" => Ok(Facility::User),
            "mail" => Ok(Facility::Mail),
            "daemon" => Ok(Facility::Daemon),
            "auth" => Ok(Facility::Auth),
            "syslog" => Ok(Facility::Syslog),
            "lpr" => Ok(Facility::Lpr),
            "news" => Ok(Facility::News),
            "uucp" => Ok(Facility::Uucp),
            "cron" => Ok(Facility::Cron),
            "authpriv" => Ok(Facility::AuthPriv),
            "ftp" => Ok(Facility::Ftp),
            "local0" => Ok(Facility::Local0),
            "local1" => Ok(Facility::Local1),
            "local2" => Ok(Facility::Local2),
            "local3" => Ok(Facility::Local3),
            "local4" => Ok(Facility::Local4),
            "local5" => Ok(Facility::Local5),
            "local6" => Ok(Facility::Local6),
            "local7" => Ok(Facility::Local7),
            _ => track_panic!(ErrorKind::Invalid, "Undefined facility: {:?}", s),
        }
    }
}

impl TryFrom<u8> for Facility {
    type Error = Error;
    fn try_from(code: u8) -> Result<Self, Error> {
        match code {
            0 => Ok(Facility::Kern),
            1 => Ok(Facility::User),
            2 => Ok(Facility::Mail),
            3 => Ok(Facility::Daemon),
            4 => Ok(Facility::Auth),
            5 => Ok(Facility::Syslog),
            6 => Ok(Facility::Lpr),
            7 => Ok(Facility::News),
            8 => Ok(Facility::Uucp),
            9 => Ok(Facility::Cron),
            10 => Ok(Facility::AuthPriv),
            11 => Ok(Facility::Ftp),
            16 => Ok(Facility::Local0),
            17 => Ok(Facility::Local1),
            18 => Ok(Facility::Local2),
            19 => Ok(Facility::Local3),
            20 => Ok(Facility::Local4),
            21 => Ok(Facility::Local5),
            22 => Ok(Facility::Local6),
            23 => Ok(Facility::Local7),
            _ => track_panic!(ErrorKind::Invalid, "Undefined facility code: {}", code),
        }
    }
}
