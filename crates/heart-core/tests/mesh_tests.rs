// Host-side tests for letter glyphs and generated meshes.

use glam::Vec3;
use heart_core::glyph::Glyph;
use heart_core::mesh::{cube, cylinder, sphere, MeshData};

fn em_width(glyph: Glyph) -> f32 {
    glyph.rects().iter().fold(0.0_f32, |w, r| w.max(r.max.x))
}

fn indices_in_range(mesh: &MeshData) -> bool {
    mesh.indices
        .iter()
        .all(|&i| (i as usize) < mesh.vertices.len())
}

#[test]
fn glyph_widths() {
    assert!((em_width(Glyph::I) - 0.6).abs() < 1e-6);
    assert!((em_width(Glyph::U) - 0.8).abs() < 1e-6);
}

#[test]
fn extruded_glyph_fits_its_em_box() {
    let origin = Vec3::new(1.0, -1.0, 0.0);
    for glyph in [Glyph::I, Glyph::U] {
        let boxes = glyph.extrude(origin, 0.5, 0.1);
        assert_eq!(boxes.len(), glyph.rects().len());
        for b in &boxes {
            assert!((b.size().z - 0.1).abs() < 1e-6);
            assert!(b.center().z.abs() < 1e-6);
            assert!(b.min.x >= origin.x - 1e-6 && b.max.x <= origin.x + em_width(glyph) * 0.5 + 1e-6);
            assert!(b.min.y >= origin.y - 1e-6 && b.max.y <= origin.y + 0.5 + 1e-6);
        }
    }
}

#[test]
fn extrusion_is_placed_at_origin() {
    let at_zero = Glyph::U.extrude(Vec3::ZERO, 0.5, 0.1);
    let offset = Vec3::new(1.6, -1.5, 0.0);
    let placed = Glyph::U.extrude(offset, 0.5, 0.1);
    for (a, b) in at_zero.iter().zip(&placed) {
        assert!(b.center().abs_diff_eq(a.center() + offset, 1e-6));
        assert!(b.size().abs_diff_eq(a.size(), 1e-6));
    }
}

#[test]
fn cube_is_flat_shaded() {
    let m = cube();
    assert_eq!(m.vertices.len(), 24);
    assert_eq!(m.index_count(), 36);
    assert!(indices_in_range(&m));
    for v in &m.vertices {
        assert!(v.position.iter().all(|c| (c.abs() - 0.5).abs() < 1e-6));
    }
}

#[test]
fn sphere_vertices_lie_on_radius() {
    let m = sphere(0.1, 8, 4);
    assert_eq!(m.vertices.len(), 9 * 5);
    assert_eq!(m.index_count(), 8 * 4 * 6);
    assert!(indices_in_range(&m));
    for v in &m.vertices {
        assert!((Vec3::from(v.position).length() - 0.1).abs() < 1e-5);
        assert!((Vec3::from(v.normal).length() - 1.0).abs() < 1e-5);
    }
}

#[test]
fn cylinder_has_unit_height() {
    let m = cylinder(0.02, 8);
    // Side strip plus two capped fans
    assert_eq!(m.vertices.len(), 18 + 2 * 10);
    assert_eq!(m.index_count(), 8 * 6 + 2 * 8 * 3);
    assert!(indices_in_range(&m));
    for v in &m.vertices {
        assert!((v.position[1].abs() - 0.5).abs() < 1e-6);
    }
}
