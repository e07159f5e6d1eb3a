/// Centers of layers stacked along one axis.
///
/// `thicknesses` lists the layers from the bottom up and `bottom` is the
/// coordinate of the first layer's lower surface.
pub fn center_from_thickness(thicknesses: &[f64], bottom: f64) -> Vec<f64> {
    let mut top = bottom;
    thicknesses
        .iter()
        .map(|d| {
            top += d;
            top - d / 2.0
        })
        .collect()
}
