use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::*;
use crate::layout::{index_to_coord, Coord};

/// Buffer whose value at each cell is that cell's index.
fn indexed(dimension: usize) -> Vec<usize> {
  (0..cell_count(dimension).unwrap()).collect()
}

fn random(dimension: usize, seed: u64) -> Vec<u32> {
  let mut rng = StdRng::seed_from_u64(seed);
  (0..cell_count(dimension).unwrap())
    .map(|_| rng.random::<u32>())
    .collect()
}

/// Where a whole-volume turn about `axis` carries `coord`.
fn turned(coord: Coord, axis: Axis, dimension: usize) -> Coord {
  let n = dimension - 1;
  let (b, c) = axis.normal().plane();
  let (vb, vc) = (coord.get(b), coord.get(c));
  let (nb, nc) = if axis.is_positive() {
    (vc, n - vb)
  } else {
    (n - vc, vb)
  };
  let mut out = coord;
  out.set(b, nb);
  out.set(c, nc);
  out
}

/// D=4 filled with 0..63: one +z turn moves the value at (0,0,0) to (0,3,0).
#[test]
fn test_concrete_pos_z_turn() {
  let dimension = 4;
  let mut buffer = indexed(dimension);
  rotate(&mut buffer, Axis::PosZ, dimension).unwrap();

  let landed = coord_to_index(Coord::new(0, 3, 0), dimension).unwrap();
  assert_eq!(buffer[landed], 0);

  let origin = coord_to_index(Coord::new(0, 0, 0), dimension).unwrap();
  let from = coord_to_index(Coord::new(3, 0, 0), dimension).unwrap();
  assert_eq!(buffer[origin], from, "(3,0,0) turns onto the origin");
}

/// Every value ends up exactly where the turn formula says.
#[test]
fn test_rotation_matches_turn_formula() {
  for dimension in 1..=6 {
    for axis in Axis::ALL {
      let mut buffer = indexed(dimension);
      rotate(&mut buffer, axis, dimension).unwrap();

      for original in 0..buffer.len() {
        let coord = index_to_coord(original, dimension).unwrap();
        let target = coord_to_index(turned(coord, axis, dimension), dimension).unwrap();
        assert_eq!(
          buffer[target], original,
          "{} D={}: value from {:?} should land at index {}",
          axis, dimension, coord, target
        );
      }
    }
  }
}

#[test]
fn test_rotation_is_a_bijection() {
  for dimension in 1..=7 {
    for axis in Axis::ALL {
      let original = random(dimension, dimension as u64);
      let mut buffer = original.clone();
      rotate(&mut buffer, axis, dimension).unwrap();

      let mut before = original.clone();
      let mut after = buffer.clone();
      before.sort_unstable();
      after.sort_unstable();
      assert_eq!(before, after, "{} D={} lost or duplicated values", axis, dimension);
    }
  }
}

#[test]
fn test_four_turns_are_identity() {
  for dimension in 1..=7 {
    for axis in Axis::ALL {
      let original = random(dimension, 100 + dimension as u64);
      let mut buffer = original.clone();
      for turn in 0..4 {
        rotate(&mut buffer, axis, dimension).unwrap();
        if turn < 3 && dimension > 1 {
          assert_ne!(buffer, original, "{} D={} after {} turns", axis, dimension, turn + 1);
        }
      }
      assert_eq!(buffer, original, "{} D={}", axis, dimension);
    }
  }
}

#[test]
fn test_opposite_turn_restores() {
  for dimension in 1..=7 {
    for axis in Axis::ALL {
      let original = random(dimension, 200 + dimension as u64);
      let mut buffer = original.clone();
      rotate(&mut buffer, axis, dimension).unwrap();
      rotate(&mut buffer, axis.opposite(), dimension).unwrap();
      assert_eq!(buffer, original, "{} then {} D={}", axis, axis.opposite(), dimension);
    }
  }
}

/// Two turns about an axis equal two turns about its opposite.
#[test]
fn test_half_turn_is_direction_independent() {
  let dimension = 5;
  let original = random(dimension, 7);
  for axis in [Axis::PosX, Axis::PosY, Axis::PosZ] {
    let mut forward = original.clone();
    let mut backward = original.clone();
    for _ in 0..2 {
      rotate(&mut forward, axis, dimension).unwrap();
      rotate(&mut backward, axis.opposite(), dimension).unwrap();
    }
    assert_eq!(forward, backward);
  }
}

/// D=3 about +x: values never leave their x-section, every section permutes
/// internally and each section's center stays put.
#[test]
fn test_x_turn_keeps_values_in_their_x_section() {
  let dimension = 3;
  let mut buffer = indexed(dimension);
  rotate(&mut buffer, Axis::PosX, dimension).unwrap();

  for (idx, value) in buffer.iter().enumerate() {
    let now = index_to_coord(idx, dimension).unwrap();
    let was = index_to_coord(*value, dimension).unwrap();
    assert_eq!(now.x, was.x, "value {} crossed x-sections", value);
  }

  for x in 0..dimension {
    let center = coord_to_index(Coord::new(x, 1, 1), dimension).unwrap();
    assert_eq!(buffer[center], center, "center of section x={} moved", x);

    let moved = (0..dimension)
      .flat_map(|y| (0..dimension).map(move |z| Coord::new(x, y, z)))
      .filter(|c| {
        let idx = coord_to_index(*c, dimension).unwrap();
        buffer[idx] != idx
      })
      .count();
    assert_eq!(moved, 8, "section x={} should permute its ring", x);
  }
}

#[test]
fn test_odd_dimension_axis_cells_are_fixed() {
  for dimension in [3, 5, 7] {
    let mid = dimension / 2;
    for axis in Axis::ALL {
      let mut buffer = indexed(dimension);
      rotate(&mut buffer, axis, dimension).unwrap();

      for s in 0..dimension {
        let mut coord = Coord::new(mid, mid, mid);
        coord.set(axis.normal(), s);
        let idx = coord_to_index(coord, dimension).unwrap();
        assert_eq!(buffer[idx], idx, "{} D={} moved axis cell {:?}", axis, dimension, coord);
      }
    }
  }
}

#[test]
fn test_rotate_quartet_cycles_four_cells() {
  let dimension = 4;
  let mut buffer = indexed(dimension);
  rotate_quartet(&mut buffer, 0, 0, 0, Axis::PosZ, dimension).unwrap();

  let at = |x, y, z| buffer[coord_to_index(Coord::new(x, y, z), dimension).unwrap()];
  let idx = |x, y, z| coord_to_index(Coord::new(x, y, z), dimension).unwrap();
  assert_eq!(at(0, 0, 0), idx(3, 0, 0), "first <- old fourth");
  assert_eq!(at(0, 3, 0), idx(0, 0, 0), "second <- old first");
  assert_eq!(at(3, 3, 0), idx(0, 3, 0), "third <- old second");
  assert_eq!(at(3, 0, 0), idx(3, 3, 0), "fourth <- old third");

  let untouched = buffer
    .iter()
    .enumerate()
    .filter(|(i, v)| *i == **v)
    .count();
  assert_eq!(untouched, buffer.len() - 4);
}

#[test]
fn test_rotate_section_touches_one_plane() {
  let dimension = 4;
  for axis in Axis::ALL {
    for section in 0..dimension {
      let mut buffer = indexed(dimension);
      rotate_section(&mut buffer, section, axis, dimension).unwrap();

      let plane = if axis.is_positive() {
        section
      } else {
        dimension - 1 - section
      };
      for (idx, value) in buffer.iter().enumerate() {
        let coord = index_to_coord(idx, dimension).unwrap();
        if coord.get(axis.normal()) != plane {
          assert_eq!(*value, idx, "{} section {} touched {:?}", axis, section, coord);
        }
      }
    }
  }
}

#[test]
fn test_rotate_layer_center_is_noop() {
  let dimension = 3;
  let mut buffer = indexed(dimension);
  rotate_layer(&mut buffer, 1, 1, Axis::PosY, dimension).unwrap();
  assert_eq!(buffer, indexed(dimension));

  // Layers past the center are also empty rings.
  rotate_layer(&mut buffer, 0, 5, Axis::PosY, dimension).unwrap();
  assert_eq!(buffer, indexed(dimension));
}

#[test]
fn test_layers_compose_into_section() {
  let dimension = 5;
  let mut by_layer = indexed(dimension);
  for layer in 0..layer_count(dimension) {
    rotate_layer(&mut by_layer, 2, layer, Axis::NegY, dimension).unwrap();
  }
  let mut by_section = indexed(dimension);
  rotate_section(&mut by_section, 2, Axis::NegY, dimension).unwrap();
  assert_eq!(by_layer, by_section);
}

#[test]
fn test_invalid_geometry_leaves_buffer_untouched() {
  let dimension = 4;
  let mut buffer = indexed(dimension);

  assert!(matches!(
    rotate_quartet(&mut buffer, 0, 0, 3, Axis::PosX, dimension),
    Err(RotorError::InvalidGeometry { .. })
  ));
  assert!(matches!(
    rotate_layer(&mut buffer, 4, 0, Axis::PosX, dimension),
    Err(RotorError::InvalidGeometry { .. })
  ));
  assert!(matches!(
    rotate_section(&mut buffer, 9, Axis::NegZ, dimension),
    Err(RotorError::InvalidGeometry { .. })
  ));
  assert_eq!(buffer, indexed(dimension));
}

#[test]
fn test_wrong_buffer_length_is_rejected() {
  let mut buffer = vec![0u8; 63];
  assert_eq!(
    rotate(&mut buffer, Axis::PosX, 4),
    Err(RotorError::BufferLength {
      expected: 64,
      actual: 63,
    })
  );
  assert!(matches!(
    rotate(&mut buffer, Axis::PosX, 0),
    Err(RotorError::InvalidDimension { .. })
  ));
}

#[test]
fn test_rotates_non_copy_elements() {
  let dimension = 3;
  let original: Vec<String> = (0..27).map(|i| format!("cell-{}", i)).collect();
  let mut buffer = original.clone();

  rotate(&mut buffer, Axis::NegX, dimension).unwrap();
  assert_ne!(buffer, original);
  for _ in 0..3 {
    rotate(&mut buffer, Axis::NegX, dimension).unwrap();
  }
  assert_eq!(buffer, original);
}
