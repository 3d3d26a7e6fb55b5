use crate::common::{event::SessionEvent, money::Money};
use std::{io::Read, str::FromStr};

#[derive(serde::Deserialize)]
/// Internal CSV row representation matching the session-script headers. Only
/// the columns an action needs are filled; the rest stay empty.
struct CsvRow {
    action: String,
    // filled for login/close
    username: Option<String>,
    pin: Option<u32>,
    // filled for transfer
    to: Option<String>,
    // filled for transfer/loan
    amount: Option<String>,
}

/// Reads and validates session actions from a CSV reader.
///
/// Supported headers: `action,username,pin,to,amount`. The `action` field is
/// normalized to lowercase; each action's required columns are checked and
/// errors carry the action name for context.
///
/// # Examples
///
/// ```
/// use bankist_core::io::reader::read_session_events;
/// use bankist_core::common::event::SessionEvent;
/// use csv::ReaderBuilder;
///
/// let data = "action,username,pin,to,amount\n\
/// login,js,1111,,\n\
/// transfer,,,jd,500\n";
/// let mut rdr = ReaderBuilder::new().from_reader(data.as_bytes());
/// let events: Vec<_> = read_session_events(&mut rdr).collect();
///
/// assert!(matches!(events[0], Ok(SessionEvent::Login { pin: 1111, .. })));
/// assert!(matches!(events[1], Ok(SessionEvent::Transfer { .. })));
/// ```
pub fn read_session_events<R: Read>(
    rdr: &mut csv::Reader<R>,
) -> impl Iterator<Item = Result<SessionEvent, String>> + '_ {
    rdr.deserialize::<CsvRow>().map(|res| {
        let row = res.map_err(|e| e.to_string())?;
        let action = row.action.trim().to_ascii_lowercase();

        match action.as_str() {
            "login" => {
                let username = row
                    .username
                    .ok_or_else(|| "login missing username".to_string())?;
                let pin = row.pin.ok_or_else(|| "login missing pin".to_string())?;
                Ok(SessionEvent::Login { username, pin })
            }
            "transfer" => {
                let to = row
                    .to
                    .ok_or_else(|| "transfer missing receiver username".to_string())?;
                let amt_str = row
                    .amount
                    .ok_or_else(|| format!("transfer missing amount for receiver {to}"))?;
                let amount = Money::from_str(&amt_str).map_err(|e| e.to_string())?;
                Ok(SessionEvent::Transfer { to, amount })
            }
            "loan" => {
                let amt_str = row
                    .amount
                    .ok_or_else(|| "loan missing amount".to_string())?;
                let amount = Money::from_str(&amt_str).map_err(|e| e.to_string())?;
                Ok(SessionEvent::Loan { amount })
            }
            "close" => {
                let username = row
                    .username
                    .ok_or_else(|| "close missing username".to_string())?;
                let pin = row.pin.ok_or_else(|| "close missing pin".to_string())?;
                Ok(SessionEvent::Close { username, pin })
            }
            "sort" => Ok(SessionEvent::SortToggle),
            "logout" => Ok(SessionEvent::Logout),
            other => Err(format!("unknown action: {other}")),
        }
    })
}
