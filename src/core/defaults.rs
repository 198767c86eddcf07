use winframe::geometry::Dim;
use winframe::geometry::Pos;
use winframe::theme::Color;

#[macro_export]
macro_rules! PROGRAM_NAME (
    () => { "wzframe" };
);

pub const INITIAL_CLIENT_POS: Pos = Pos {
    x: 120,
    y: 120,
};

pub const INITIAL_CLIENT_DIM: Dim = Dim {
    w: 480,
    h: 260,
};

pub const CLIENT_COLOR: Color = 0xdedede;
