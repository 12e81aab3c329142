/// Side length of the classic square grid.
pub const CLASSIC_EXTENT: usize = 10;

/// Lengths of the classic fleet: carrier, battleship, cruiser, submarine, destroyer.
pub const CLASSIC_FLEET: [usize; 5] = [5, 4, 3, 3, 2];

/// Environment variable holding the log level read by [`init_logging`](crate::init_logging).
pub const LOG_ENV_VAR: &str = "NAVAL_GRID_LOG";
