use crate::error::GameError;

/// Validated board dimensions and winning run length.
///
/// A config always describes a board that can hold a run in at least one
/// dimension. It cannot be changed once built.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct BoardConfig {
    width: usize,
    height: usize,
    run_length: usize,
}

impl BoardConfig {
    /// Builds a config from already-parsed dimensions.
    ///
    /// # Errors
    /// `InvalidConfig` for a zero dimension, `IllegalGame` when neither
    /// `width` nor `height` reaches `run_length`.
    pub fn new(width: usize, height: usize, run_length: usize) -> Result<Self, GameError> {
        if width == 0 || height == 0 || run_length == 0 {
            return Err(GameError::InvalidConfig(format!(
                "{} {} {}",
                width, height, run_length
            )));
        }
        if width < run_length && height < run_length {
            return Err(GameError::IllegalGame {
                width,
                height,
                run_length,
            });
        }
        Ok(Self {
            width,
            height,
            run_length,
        })
    }

    /// Parses the configuration record: exactly three whitespace-separated
    /// positive integers, `width height run_length`.
    pub fn parse<'a, I>(raw_fields: I) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let fields: Vec<&str> = raw_fields.into_iter().collect();
        let invalid = || GameError::InvalidConfig(fields.join(" "));
        if fields.len() != 3 {
            return Err(invalid());
        }
        let mut dims = [0usize; 3];
        for (dim, field) in dims.iter_mut().zip(&fields) {
            let value = field.parse::<i64>().map_err(|_| invalid())?;
            *dim = usize::try_from(value).map_err(|_| invalid())?;
        }
        Self::new(dims[0], dims[1], dims[2])
    }

    /// Parses a whole configuration line.
    pub fn parse_line(line: &str) -> Result<Self, GameError> {
        Self::parse(line.split_whitespace())
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows on the full board, including rows the engine has evicted.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Consecutive pieces needed to win.
    ///
    /// # Returns
    /// Always at least 1, and at most `max(width, height)`.
    pub fn run_length(&self) -> usize {
        self.run_length
    }

    /// Number of cells on the full conceptual board, saturating on overflow.
    pub fn capacity(&self) -> u64 {
        (self.width as u64).saturating_mul(self.height as u64)
    }
}
