//! # STL Export
//!
//! Writes meshes as binary or ASCII STL.
//!
//! ## Binary layout
//!
//! ```text
//! [80 bytes header][u32 triangle count]
//! per triangle: [3 x f32 normal][3 x 3 x f32 vertices][u16 attribute]
//! ```
//!
//! All values are little-endian. Coordinates are converted to f32 here and
//! nowhere else.

use crate::error::MeshError;
use crate::mesh::Mesh;
use config::constants::STL_HEADER_BYTES;
use glam::DVec3;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// STL flavour to write.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StlFormat {
    /// Compact little-endian binary STL.
    #[default]
    Binary,
    /// Human-readable ASCII STL.
    Ascii,
}

/// Writes `mesh` as STL to `writer`.
///
/// `name` goes into the binary header (truncated to 80 bytes) or the ASCII
/// `solid` line.
///
/// # Example
///
/// ```rust
/// use gingerbread_mesh::{create_cube, write_stl, StlFormat};
/// use glam::DVec3;
///
/// let cube = create_cube(DVec3::ONE, false).unwrap();
/// let mut bytes = Vec::new();
/// write_stl(&cube, "cube", &mut bytes, StlFormat::Binary).unwrap();
/// assert_eq!(bytes.len(), 84 + 12 * 50);
/// ```
pub fn write_stl<W: Write>(
    mesh: &Mesh,
    name: &str,
    writer: &mut W,
    format: StlFormat,
) -> Result<(), MeshError> {
    match format {
        StlFormat::Binary => write_binary(mesh, name, writer)?,
        StlFormat::Ascii => write_ascii(mesh, name, writer)?,
    }
    Ok(())
}

/// Creates `path` and writes `mesh` to it as STL.
///
/// The file stem is used as the solid name.
pub fn export_stl_file(mesh: &Mesh, path: &Path, format: StlFormat) -> Result<(), MeshError> {
    let name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("mesh");
    let mut writer = BufWriter::new(File::create(path)?);
    write_stl(mesh, name, &mut writer, format)?;
    writer.flush()?;
    debug!(path = %path.display(), triangles = mesh.triangle_count(), "wrote STL");
    Ok(())
}

fn facet_normal([a, b, c]: &[DVec3; 3]) -> DVec3 {
    (*b - *a).cross(*c - *a).normalize_or_zero()
}

fn write_binary<W: Write>(mesh: &Mesh, name: &str, writer: &mut W) -> std::io::Result<()> {
    let mut header = [0u8; STL_HEADER_BYTES];
    let name = name.as_bytes();
    let len = name.len().min(STL_HEADER_BYTES);
    header[..len].copy_from_slice(&name[..len]);
    writer.write_all(&header)?;

    let count = u32::try_from(mesh.triangle_count()).map_err(|_| {
        std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "too many triangles for binary STL",
        )
    })?;
    writer.write_all(&count.to_le_bytes())?;

    for tri in mesh.triangle_positions() {
        let normal = facet_normal(&tri);
        for v in std::iter::once(normal).chain(tri) {
            for c in [v.x, v.y, v.z] {
                writer.write_all(&(c as f32).to_le_bytes())?;
            }
        }
        writer.write_all(&0u16.to_le_bytes())?;
    }
    Ok(())
}

fn write_ascii<W: Write>(mesh: &Mesh, name: &str, writer: &mut W) -> std::io::Result<()> {
    writeln!(writer, "solid {name}")?;
    for tri in mesh.triangle_positions() {
        let n = facet_normal(&tri);
        writeln!(writer, "  facet normal {:e} {:e} {:e}", n.x as f32, n.y as f32, n.z as f32)?;
        writeln!(writer, "    outer loop")?;
        for v in tri {
            writeln!(writer, "      vertex {:e} {:e} {:e}", v.x as f32, v.y as f32, v.z as f32)?;
        }
        writeln!(writer, "    endloop")?;
        writeln!(writer, "  endfacet")?;
    }
    writeln!(writer, "endsolid {name}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::create_cube;

    fn read_f32(bytes: &[u8], offset: usize) -> f32 {
        f32::from_le_bytes(bytes[offset..offset + 4].try_into().unwrap())
    }

    #[test]
    fn test_binary_layout() {
        let cube = create_cube(DVec3::splat(2.0), false).unwrap();
        let mut bytes = Vec::new();
        write_stl(&cube, "gingerbread_chimney", &mut bytes, StlFormat::Binary).unwrap();

        assert_eq!(bytes.len(), 84 + 50 * 12);
        assert!(bytes.starts_with(b"gingerbread_chimney"));
        assert_eq!(u32::from_le_bytes(bytes[80..84].try_into().unwrap()), 12);

        // First triangle is on the -Z face
        assert_eq!(read_f32(&bytes, 84 + 8), -1.0);
        assert_eq!(u16::from_le_bytes(bytes[84 + 48..84 + 50].try_into().unwrap()), 0);
    }

    #[test]
    fn test_binary_header_truncates_long_names() {
        let cube = create_cube(DVec3::ONE, false).unwrap();
        let name = "x".repeat(200);
        let mut bytes = Vec::new();
        write_stl(&cube, &name, &mut bytes, StlFormat::Binary).unwrap();
        assert_eq!(bytes.len(), 84 + 50 * 12);
    }

    #[test]
    fn test_ascii_structure() {
        let cube = create_cube(DVec3::ONE, false).unwrap();
        let mut bytes = Vec::new();
        write_stl(&cube, "cube", &mut bytes, StlFormat::Ascii).unwrap();
        let text = String::from_utf8(bytes).unwrap();

        assert!(text.starts_with("solid cube\n"));
        assert!(text.trim_end().ends_with("endsolid cube"));
        assert_eq!(text.matches("facet normal").count(), 12);
        assert_eq!(text.matches("vertex").count(), 36);
    }

    #[test]
    fn test_export_stl_file() {
        let cube = create_cube(DVec3::ONE, true).unwrap();
        let path = std::env::temp_dir().join(format!(
            "gingerbread_mesh_export_{}.stl",
            std::process::id()
        ));

        export_stl_file(&cube, &path, StlFormat::Binary).unwrap();
        let written = std::fs::read(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(written.len(), 84 + 50 * 12);
    }
}
