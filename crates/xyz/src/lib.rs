use std::{fmt::Display, fs::read_to_string, io, path::Path, str::FromStr};

use serde::{Deserialize, Serialize};


/// one line of an XYZ geometry. the coordinates are kept as the raw text from
/// the file until they are formatted for display
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Atom {
    pub label: String,
    pub x: String,
    pub y: String,
    pub z: String,
}

impl Atom {
    pub fn new(label: &str, x: &str, y: &str, z: &str) -> Self {
        Self {
            label: label.to_owned(),
            x: x.to_owned(),
            y: y.to_owned(),
            z: z.to_owned(),
        }
    }

    pub fn coords(&self) -> [&str; 3] {
        [&self.x, &self.y, &self.z]
    }
}

impl FromStr for Atom {
    type Err = io::Error;

    /// parse an Atom from a line like
    ///  C 1.0 1.0 1.0
    /// fields after the fourth are ignored
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<_> = s.split_whitespace().collect();
        if fields.len() < 4 {
            return Err(io::Error::other("wrong number of fields in Atom"));
        }
        Ok(Self::new(fields[0], fields[1], fields[2], fields[3]))
    }
}

impl Display for Atom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:2} {:>15} {:>15} {:>15}",
            self.label, self.x, self.y, self.z
        )
    }
}

#[macro_export]
macro_rules! geom {
    ($($sym:ident $x:literal $y:literal $z:literal)+) => {
	$crate::Geom::new(vec![
	    $($crate::Atom::new(
		stringify!($sym),
		stringify!($x),
		stringify!($y),
		stringify!($z),
	    ),)*
	    ])
    };
}

/// an XYZ geometry: a two-line header (atom count and comment) followed by
/// one [Atom] per line, in file order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Geom {
    pub atoms: Vec<Atom>,
}

impl Geom {
    pub fn new(atoms: Vec<Atom>) -> Self {
        Self { atoms }
    }

    /// load a geometry from the file at `path`
    pub fn load(path: impl AsRef<Path>) -> io::Result<Self> {
        let s = read_to_string(path)?;
        // parsing is infallible
        Ok(s.parse().unwrap())
    }

    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }
}

impl FromStr for Geom {
    type Err = std::string::ParseError;

    /// parse lines like
    ///      O           0.000000000    0.000000000   -0.124238453
    ///      H           0.000000000    1.431390207    0.986041184
    /// into a geometry. the first two lines are skipped unconditionally,
    /// whatever they contain, as are later lines with fewer than four fields
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut atoms = Vec::new();
        for line in s.lines().skip(2) {
            let fields = line.split_whitespace().collect::<Vec<_>>();
            if fields.len() < 4 {
                log::trace!("skipping line `{line}`");
                continue;
            }
            atoms.push(line.parse().unwrap());
        }
        Ok(Self { atoms })
    }
}

impl Display for Geom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for atom in &self.atoms {
            writeln!(f, "{atom}")?;
        }
        Ok(())
    }
}
