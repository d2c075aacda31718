use std::fmt;

use crate::selection::SelectedPoint;

/// MAV_CMD_NAV_WAYPOINT.
pub const CMD_NAV_WAYPOINT: u16 = 16;

/// MAV_FRAME_GLOBAL_RELATIVE_ALT – the frame emitted for every waypoint.
pub const FRAME_GLOBAL_RELATIVE_ALT: u8 = 3;

/// MAV_FRAME_GLOBAL – the format family's home-position frame. Documented
/// for completeness; this tool never emits it.
pub const FRAME_HOME: u8 = 0;

// ---------------------------------------------------------------------------
// Waypoint – one line of a QGC WPL 110 mission file
// ---------------------------------------------------------------------------

/// One navigation target of a mission file.
///
/// Field order matches the WPL 110 line layout:
/// `seq current frame command param1..param4 lat lon alt autocontinue`.
#[derive(Debug, Clone, PartialEq)]
pub struct Waypoint {
    pub seq: usize,
    pub current: bool,
    pub frame: u8,
    pub command: u16,
    pub params: [f64; 4],
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: f64,
    pub autocontinue: bool,
}

impl Waypoint {
    /// A plain NAV_WAYPOINT at the picked coordinates, altitude 0.
    pub fn nav(seq: usize, point: SelectedPoint) -> Self {
        Waypoint {
            seq,
            current: false,
            frame: FRAME_GLOBAL_RELATIVE_ALT,
            command: CMD_NAV_WAYPOINT,
            params: [0.0; 4],
            latitude: point.latitude,
            longitude: point.longitude,
            altitude: 0.0,
            autocontinue: true,
        }
    }
}

impl fmt::Display for Waypoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {} {} {} {} {} {} {}",
            self.seq,
            self.current as u8,
            self.frame,
            self.command,
            self.params[0],
            self.params[1],
            self.params[2],
            self.params[3],
            self.latitude,
            self.longitude,
            self.altitude,
            self.autocontinue as u8,
        )
    }
}
