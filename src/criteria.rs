use crate::{Error, Weight};

/// The direction in which a criterion is preferred.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Impact {
    /// `+`: larger raw values are preferred.
    Benefit,
    /// `-`: smaller raw values are preferred.
    Cost,
}

impl Impact {
    /// Return the `(ideal_best, ideal_worst)` pair for one column of the weighted-normalized
    /// matrix. Returns `None` for an empty column.
    pub fn ideal_points<I>(self, column: I) -> Option<(f64, f64)>
    where
        I: IntoIterator<Item = f64>,
    {
        let (min, max) = column.into_iter().fold(None, |acc, x| match acc {
            None => Some((x, x)),
            Some((min, max)) => Some((f64::min(min, x), f64::max(max, x))),
        })?;
        match self {
            Self::Benefit => Some((max, min)),
            Self::Cost => Some((min, max)),
        }
    }
}

impl std::str::FromStr for Impact {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Self::Benefit),
            "-" => Ok(Self::Cost),
            _ => Err(()),
        }
    }
}

/// Parse a comma-separated weight list such as `"1,1,2,0.5"`. Entries are trimmed. Positions in
/// errors are 1-based.
pub fn parse_weights(list: &str) -> Result<Vec<Weight>, Error> {
    list.split(',')
        .map(str::trim)
        .enumerate()
        .map(|(index, entry)| {
            entry
                .parse::<f64>()
                .ok()
                .and_then(Weight::new)
                .ok_or_else(|| Error::InvalidWeight {
                    position: index + 1,
                    value: entry.to_string(),
                })
        })
        .collect()
}

/// Parse a comma-separated impact list such as `"+,+,-"`. Entries are trimmed. Positions in
/// errors are 1-based.
pub fn parse_impacts(list: &str) -> Result<Vec<Impact>, Error> {
    list.split(',')
        .map(str::trim)
        .enumerate()
        .map(|(index, entry)| {
            entry.parse::<Impact>().map_err(|_| Error::InvalidImpactSymbol {
                position: index + 1,
                symbol: entry.to_string(),
            })
        })
        .collect()
}
