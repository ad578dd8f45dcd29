/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

#![allow(clippy::all)] // Tests are lower priority to fix

use flo_transform::*;

use std::f64::consts::PI;

fn approx_equal(m1: Matrix, m2: Matrix) -> bool {
    (0..6).all(|index| (m1[index] - m2[index]).abs() < 1e-6)
}

#[test]
fn multiplying_by_identity_on_the_left_changes_nothing() {
    let matrix = Matrix::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);

    assert!(Matrix::identity().multiply(&matrix) == matrix);
}

#[test]
fn multiplying_by_identity_on_the_right_changes_nothing() {
    let matrix = Matrix::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);

    assert!(matrix.multiply(&Matrix::identity()) == matrix);
}

#[test]
fn operator_matches_multiply() {
    let m1 = Matrix::from_rotation(0.7);
    let m2 = Matrix::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);

    assert!(m1 * m2 == m1.multiply(&m2));
    assert!(m2 * m1 == m2.multiply(&m1));
}

#[test]
fn multiply_applies_left_hand_transform_first() {
    let scale = Matrix::from_scale(2.0, 2.0);
    let translate = Matrix::from_translation(5.0, 7.0);

    // Scaling first then translating moves (1, 1) to (2, 2) and then to (7, 9)
    let scale_then_translate = scale.multiply(&translate);

    assert!(scale_then_translate.transform_point(1.0, 1.0) == (7.0, 9.0));

    // Translating first moves (1, 1) to (6, 8), which the scale doubles
    let translate_then_scale = translate.multiply(&scale);

    assert!(translate_then_scale.transform_point(1.0, 1.0) == (12.0, 16.0));
}

#[test]
fn rotate_composes_onto_the_existing_transform() {
    let mut rotated = Matrix::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
    let expected = rotated.multiply(&Matrix::from_rotation(0.7));

    rotated.rotate(0.7);

    assert!(rotated == expected);
}

#[test]
fn scale_composes_onto_the_existing_transform() {
    let mut scaled = Matrix::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
    let expected = scaled.multiply(&Matrix::from_scale(2.0, 3.0));

    scaled.scale(2.0, 3.0);

    assert!(scaled == expected);
}

#[test]
fn translate_composes_onto_the_existing_transform() {
    let mut translated = Matrix::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
    let expected = translated.multiply(&Matrix::from_translation(10.0, 20.0));

    translated.translate(10.0, 20.0);

    assert!(translated == expected);
}

#[test]
fn rotate_then_scale_differs_from_scale_then_rotate() {
    let angle = PI / 6.0;

    let mut rotate_scale = Matrix::identity();
    rotate_scale.rotate(angle);
    rotate_scale.scale(2.0, 3.0);

    let mut scale_rotate = Matrix::identity();
    scale_rotate.scale(2.0, 3.0);
    scale_rotate.rotate(angle);

    assert!(rotate_scale != scale_rotate);
}

#[test]
fn rotate_then_scale_matches_the_closed_form_product() {
    let angle = PI / 6.0;
    let (sin, cos) = angle.sin_cos();

    let mut composed = Matrix::identity();
    composed.rotate(angle);
    composed.scale(2.0, 3.0);

    assert!(composed == Matrix::from_rotation(angle).multiply(&Matrix::from_scale(2.0, 3.0)));
    assert!(approx_equal(
        composed,
        Matrix::new(2.0 * cos, 3.0 * sin, -2.0 * sin, 3.0 * cos, 0.0, 0.0)
    ));
}

#[test]
fn rotations_compose_by_adding_angles() {
    let composed = Matrix::from_rotation(0.3).multiply(&Matrix::from_rotation(0.5));

    assert!(approx_equal(composed, Matrix::from_rotation(0.8)));
}

#[test]
fn zero_rotation_is_identity() {
    assert!(Matrix::from_rotation(0.0) == Matrix::identity());
}

#[test]
fn quarter_turn_moves_unit_x_to_unit_y() {
    let quarter_turn = Matrix::from_rotation(PI / 2.0);
    let (x, y) = quarter_turn.transform_point(1.0, 0.0);

    assert!((x - 0.0).abs() < 1e-6, "x is {}", x);
    assert!((y - 1.0).abs() < 1e-6, "y is {}", y);
}

#[test]
fn from_scale_coefficients() {
    assert!(Matrix::from_scale(2.0, 3.0) == Matrix::new(2.0, 0.0, 0.0, 3.0, 0.0, 0.0));
}

#[test]
fn from_translation_coefficients() {
    assert!(Matrix::from_translation(5.0, 7.0) == Matrix::new(1.0, 0.0, 0.0, 1.0, 5.0, 7.0));
}

#[test]
fn points_pick_up_translation() {
    let translation = Matrix::from_translation(5.0, 7.0);

    assert!(translation.transform_point(0.0, 0.0) == (5.0, 7.0));
}

#[test]
fn distances_ignore_translation() {
    let translation = Matrix::from_translation(5.0, 7.0);

    assert!(translation.transform_distance(0.0, 0.0) == (0.0, 0.0));
    assert!(translation.transform_distance(1.0, 2.0) == (1.0, 2.0));
}

#[test]
fn distances_are_scaled_and_sheared() {
    let transform = Matrix::new(2.0, 0.0, 1.0, 3.0, 100.0, 200.0);

    // (dx, dy) maps to (xx*dx + xy*dy, yx*dx + yy*dy) with no translation
    assert!(transform.transform_distance(1.0, 1.0) == (3.0, 3.0));
}

#[test]
fn transform_point_applies_the_full_map() {
    let transform = Matrix::new(2.0, 0.0, 1.0, 3.0, 100.0, 200.0);

    assert!(transform.transform_point(1.0, 1.0) == (103.0, 203.0));
}
