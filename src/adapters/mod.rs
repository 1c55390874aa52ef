//! Adapters: concrete implementations of the hexagonal port traits.
//!
//! | Adapter    | Implements  | Connects to                     |
//! |------------|-------------|---------------------------------|
//! | `eeprom`   | WordStorage | RAM-backed EEPROM image         |
//! | `log_sink` | EventSink   | `log` facade (serial console)   |

pub mod eeprom;
pub mod log_sink;
