use once_cell::sync::Lazy;
use rustc_hash::FxHashSet;

/// Properties whose bare numeric values are dimensionless.
static UNITLESS: Lazy<FxHashSet<&'static str>> = Lazy::new(|| {
    [
        "animationIterationCount",
        "borderImageOutset",
        "borderImageSlice",
        "borderImageWidth",
        "boxFlex",
        "boxFlexGroup",
        "boxOrdinalGroup",
        "columnCount",
        "columns",
        "flex",
        "flexGrow",
        "flexPositive",
        "flexShrink",
        "flexNegative",
        "flexOrder",
        "gridRow",
        "gridRowEnd",
        "gridRowSpan",
        "gridRowStart",
        "gridColumn",
        "gridColumnEnd",
        "gridColumnSpan",
        "gridColumnStart",
        "fontWeight",
        "lineClamp",
        "lineHeight",
        "opacity",
        "order",
        "orphans",
        "tabSize",
        "widows",
        "zIndex",
        "zoom",
        // SVG
        "fillOpacity",
        "floodOpacity",
        "stopOpacity",
        "strokeDasharray",
        "strokeDashoffset",
        "strokeMiterlimit",
        "strokeOpacity",
        "strokeWidth",
    ]
    .into_iter()
    .collect()
});

/// Returns `true` if a bare number on `name` must not get a unit suffix.
///
/// `name` is the property name as written in the style object (camelCase),
/// not its dashified form.
pub fn is_unitless(name: &str) -> bool {
    UNITLESS.contains(name)
}
