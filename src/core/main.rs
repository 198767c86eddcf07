#![deny(clippy::all)]

#[macro_use]
extern crate log;

#[allow(unused_imports)]
use simplelog::LevelFilter;
#[allow(unused_imports)]
use simplelog::SimpleLogger;

use winframe::theme::FrameStyle;
use winframe::xdata::xconnection::XConnection;
pub use winframe::Result;

#[macro_use]
mod defaults;

mod model;

use model::Decorator;

pub fn main() -> Result<()> {
    #[cfg(debug_assertions)]
    SimpleLogger::init(LevelFilter::Debug, simplelog::Config::default())?;

    let (conn, screen_num) = x11rb::connect(None)?;
    let xconn = XConnection::new(&conn, screen_num)?;

    let style = FrameStyle::DEFAULT
        .with_draggable_border_width(xconn.preferences().draggable_border_width);

    Decorator::new(&xconn, style)?.run();

    Ok(())
}
