use std::{fmt::Write, io};

use xyz::Atom;

/// largest atom count that still fits in a single table
pub const MAX_SINGLE_TABLE: usize = 34;

pub const ATOMS_PER_PAGE: usize = 66;
pub const ATOMS_PER_COLUMN: usize = 33;

const HEADER: &str = r"Atoms & X (\AA) & Y (\AA) & Z (\AA)";

/// format `coord` for display with six digits after the decimal point, then
/// drop the last two characters when the result ends in "00" but the
/// fractional part is not all zeros: "1.230000" becomes "1.2300", while
/// "1.000000" keeps all six digits
pub fn format_coord(coord: &str) -> io::Result<String> {
    let f: f64 = coord.parse().map_err(|_| {
        io::Error::other(format!(
            "failed to parse coordinate `{coord}` as f64"
        ))
    })?;
    let mut s = format!("{f:.6}");
    if s.ends_with("00") && !s.ends_with("000000") {
        s.truncate(s.len() - 2);
    }
    Ok(s)
}

fn format_coords(atom: &Atom) -> io::Result<[String; 3]> {
    let [x, y, z] = atom.coords();
    Ok([format_coord(x)?, format_coord(y)?, format_coord(z)?])
}

fn caption(name: &str) -> String {
    format!(
        r"\caption{{Optimized geometry of \textbf{{{name}}} in the S$_0$ state.}}"
    )
}

/// render `atoms` as a LaTeX table captioned with `name`. geometries of up to
/// [MAX_SINGLE_TABLE] atoms fit in one `tabular`; larger ones paginate into
/// two-column `longtable` blocks
pub fn make_table(name: &str, atoms: &[Atom]) -> io::Result<String> {
    if atoms.len() <= MAX_SINGLE_TABLE {
        log::debug!("{} atoms, single table", atoms.len());
        single_table(name, atoms)
    } else {
        log::debug!("{} atoms, paginating", atoms.len());
        long_table(name, atoms)
    }
}

fn single_table(name: &str, atoms: &[Atom]) -> io::Result<String> {
    let mut t = String::new();
    writeln!(t, r"\begin{{table}}[H]").unwrap();
    writeln!(t, r"\centering").unwrap();
    writeln!(t, "{}", caption(name)).unwrap();
    writeln!(t, r"\begin{{tabular}}{{lrrr}}").unwrap();
    writeln!(t, r"\hline").unwrap();
    writeln!(t, r"{HEADER} \\").unwrap();
    writeln!(t, r"\hline").unwrap();
    for atom in atoms {
        let [x, y, z] = format_coords(atom)?;
        writeln!(t, r"{} & {x} & {y} & {z} \\", atom.label).unwrap();
    }
    writeln!(t, r"\hline").unwrap();
    writeln!(t, r"\end{{tabular}}").unwrap();
    writeln!(t, r"\end{{table}}").unwrap();
    Ok(t)
}

/// paginated layout: pages of [ATOMS_PER_PAGE] atoms, each split into left
/// and right columns of [ATOMS_PER_COLUMN]. the right column of the last
/// page may run short, leaving its cells blank
fn long_table(name: &str, atoms: &[Atom]) -> io::Result<String> {
    let mut t = String::new();
    for (page, chunk) in atoms.chunks(ATOMS_PER_PAGE).enumerate() {
        if page > 0 {
            writeln!(t, r"\clearpage").unwrap();
        }
        writeln!(t, r"\centering").unwrap();
        writeln!(t, r"\begin{{longtable}}{{cccccccc}}").unwrap();
        writeln!(t, r"{} \\", caption(name)).unwrap();
        // repeat the header on every rendered page
        for end in [r"\endfirsthead", r"\endhead"] {
            writeln!(t, r"\toprule").unwrap();
            writeln!(t, r"{HEADER} & {HEADER} \\").unwrap();
            writeln!(t, r"\midrule").unwrap();
            writeln!(t, "{end}").unwrap();
        }
        writeln!(t, r"\bottomrule").unwrap();
        writeln!(t, r"\endfoot").unwrap();
        let mid = chunk.len().min(ATOMS_PER_COLUMN);
        let (left, right) = chunk.split_at(mid);
        for (i, l) in left.iter().enumerate() {
            let [x, y, z] = format_coords(l)?;
            write!(t, r"{} & {x} & {y} & {z}", l.label).unwrap();
            match right.get(i) {
                Some(r) => {
                    let [x, y, z] = format_coords(r)?;
                    writeln!(t, r" & {} & {x} & {y} & {z} \\", r.label)
                        .unwrap();
                }
                None => writeln!(t, r" & & & & \\").unwrap(),
            }
        }
        writeln!(t, r"\end{{longtable}}").unwrap();
    }
    Ok(t)
}
