//! Earth: heliocentric ecliptic-of-date series, truncated VSOP87D.
//!
//! Amplitudes are in units of 1e-8 rad (L, B) or 1e-8 AU (R).

use crate::series::{Term, VsopSeries};

#[rustfmt::skip]
const L0: &[Term] = &[
    Term::new(175347046.0, 0.0, 0.0),
    Term::new(3341656.0, 4.6692568, 6283.07585),
    Term::new(34894.0, 4.6261, 12566.1517),
    Term::new(3497.0, 2.7441, 5753.3849),
    Term::new(3418.0, 2.8289, 3.5231),
    Term::new(3136.0, 3.6277, 77713.7715),
    Term::new(2676.0, 4.4181, 7860.4194),
    Term::new(2343.0, 6.1352, 3930.2097),
    Term::new(1324.0, 0.7425, 11506.7698),
    Term::new(1273.0, 2.0371, 529.691),
    Term::new(1199.0, 1.1096, 1577.3435),
    Term::new(990.0, 5.233, 5884.927),
    Term::new(902.0, 2.045, 26.298),
    Term::new(857.0, 3.508, 398.149),
    Term::new(780.0, 1.179, 5223.694),
    Term::new(753.0, 2.533, 5507.553),
    Term::new(505.0, 4.583, 18849.228),
    Term::new(492.0, 4.205, 775.523),
    Term::new(357.0, 2.92, 0.067),
    Term::new(317.0, 5.849, 11790.629),
    Term::new(284.0, 1.899, 796.298),
    Term::new(271.0, 0.315, 10977.079),
    Term::new(243.0, 0.345, 5486.778),
    Term::new(206.0, 4.806, 2544.314),
    Term::new(205.0, 1.869, 5573.143),
    Term::new(202.0, 2.458, 6069.777),
    Term::new(156.0, 0.833, 213.299),
    Term::new(132.0, 3.411, 2942.463),
    Term::new(126.0, 1.083, 20.775),
    Term::new(115.0, 0.645, 0.98),
    Term::new(103.0, 0.636, 4694.003),
    Term::new(102.0, 0.976, 15720.839),
    Term::new(102.0, 4.267, 7.114),
    Term::new(99.0, 6.21, 2146.17),
    Term::new(98.0, 0.68, 155.42),
    Term::new(86.0, 5.98, 161000.69),
    Term::new(85.0, 1.3, 6275.96),
    Term::new(85.0, 3.67, 71430.7),
    Term::new(80.0, 1.81, 17260.15),
    Term::new(79.0, 3.04, 12036.46),
    Term::new(75.0, 1.76, 5088.63),
    Term::new(74.0, 3.5, 3154.69),
    Term::new(74.0, 4.68, 801.82),
    Term::new(70.0, 0.83, 9437.76),
    Term::new(62.0, 3.98, 8827.39),
    Term::new(61.0, 1.82, 7084.9),
    Term::new(57.0, 2.78, 6286.6),
    Term::new(56.0, 4.39, 14143.5),
    Term::new(56.0, 3.47, 6279.55),
    Term::new(52.0, 0.19, 12139.55),
    Term::new(52.0, 1.33, 1748.02),
    Term::new(51.0, 0.28, 5856.48),
    Term::new(49.0, 0.49, 1194.45),
    Term::new(41.0, 5.37, 8429.24),
    Term::new(41.0, 2.4, 19651.05),
    Term::new(39.0, 6.17, 10447.39),
    Term::new(37.0, 6.04, 10213.29),
    Term::new(37.0, 2.57, 1059.38),
    Term::new(36.0, 1.71, 2352.87),
    Term::new(36.0, 1.78, 6812.77),
    Term::new(33.0, 0.59, 17789.85),
    Term::new(30.0, 0.44, 83996.85),
    Term::new(30.0, 2.74, 1349.87),
    Term::new(25.0, 3.16, 4690.48),
];

#[rustfmt::skip]
const L1: &[Term] = &[
    Term::new(628331966747.0, 0.0, 0.0),
    Term::new(206059.0, 2.678235, 6283.07585),
    Term::new(4303.0, 2.6351, 12566.1517),
    Term::new(425.0, 1.59, 3.523),
    Term::new(119.0, 5.796, 26.298),
    Term::new(109.0, 2.966, 1577.344),
    Term::new(93.0, 2.59, 18849.23),
    Term::new(72.0, 1.14, 529.69),
    Term::new(68.0, 1.87, 398.15),
    Term::new(67.0, 4.41, 5507.55),
    Term::new(59.0, 2.89, 5223.69),
    Term::new(56.0, 2.17, 155.42),
    Term::new(45.0, 0.4, 796.3),
    Term::new(36.0, 0.47, 775.52),
    Term::new(29.0, 2.65, 7.11),
    Term::new(21.0, 5.34, 0.98),
    Term::new(19.0, 1.85, 5486.78),
    Term::new(19.0, 4.97, 213.3),
    Term::new(17.0, 2.99, 6275.96),
    Term::new(16.0, 0.03, 2544.31),
    Term::new(16.0, 1.43, 2146.17),
    Term::new(15.0, 1.21, 10977.08),
    Term::new(12.0, 2.83, 1748.02),
    Term::new(12.0, 3.26, 5088.63),
    Term::new(12.0, 5.27, 1194.45),
    Term::new(12.0, 2.08, 4694.0),
    Term::new(11.0, 0.77, 553.57),
    Term::new(10.0, 1.3, 6286.6),
    Term::new(10.0, 4.24, 1349.87),
    Term::new(9.0, 2.7, 242.73),
    Term::new(9.0, 5.64, 951.72),
    Term::new(8.0, 5.3, 2352.87),
    Term::new(6.0, 2.65, 9437.76),
    Term::new(6.0, 4.67, 4690.48),
];

#[rustfmt::skip]
const L2: &[Term] = &[
    Term::new(52919.0, 0.0, 0.0),
    Term::new(8720.0, 1.0721, 6283.0758),
    Term::new(309.0, 0.867, 12566.152),
    Term::new(27.0, 0.05, 3.52),
    Term::new(16.0, 5.19, 26.3),
    Term::new(16.0, 3.68, 155.42),
    Term::new(10.0, 0.76, 18849.23),
    Term::new(9.0, 2.06, 77713.77),
    Term::new(7.0, 0.83, 775.52),
    Term::new(5.0, 4.66, 1577.34),
    Term::new(4.0, 1.03, 7.11),
    Term::new(4.0, 3.44, 5573.14),
    Term::new(3.0, 5.14, 796.3),
    Term::new(3.0, 6.05, 5507.55),
    Term::new(3.0, 1.19, 242.73),
    Term::new(3.0, 6.12, 529.69),
    Term::new(3.0, 0.31, 398.15),
    Term::new(3.0, 2.28, 553.57),
    Term::new(2.0, 4.38, 5223.69),
    Term::new(2.0, 3.75, 0.98),
];

#[rustfmt::skip]
const L3: &[Term] = &[
    Term::new(289.0, 5.844, 6283.076),
    Term::new(35.0, 0.0, 0.0),
    Term::new(17.0, 5.49, 12566.15),
    Term::new(3.0, 5.2, 155.42),
    Term::new(1.0, 4.72, 3.52),
    Term::new(1.0, 5.3, 18849.23),
    Term::new(1.0, 5.97, 242.73),
];

#[rustfmt::skip]
const L4: &[Term] = &[
    Term::new(114.0, 3.142, 0.0),
    Term::new(8.0, 4.13, 6283.08),
    Term::new(1.0, 3.84, 12566.15),
];

#[rustfmt::skip]
const L5: &[Term] = &[
    Term::new(1.0, 3.14, 0.0),
];

#[rustfmt::skip]
const B0: &[Term] = &[
    Term::new(280.0, 3.199, 84334.662),
    Term::new(102.0, 5.422, 5507.553),
    Term::new(80.0, 3.88, 5223.69),
    Term::new(44.0, 3.7, 2352.87),
    Term::new(32.0, 4.0, 1577.34),
];

#[rustfmt::skip]
const B1: &[Term] = &[
    Term::new(9.0, 3.9, 5507.55),
    Term::new(6.0, 1.73, 5223.69),
];

#[rustfmt::skip]
const R0: &[Term] = &[
    Term::new(100013989.0, 0.0, 0.0),
    Term::new(1670700.0, 3.0984635, 6283.07585),
    Term::new(13956.0, 3.05525, 12566.1517),
    Term::new(3084.0, 5.1985, 77713.7715),
    Term::new(1628.0, 1.1739, 5753.3849),
    Term::new(1576.0, 2.8469, 7860.4194),
    Term::new(925.0, 5.453, 11506.77),
    Term::new(542.0, 4.564, 3930.21),
    Term::new(472.0, 3.661, 5884.927),
    Term::new(346.0, 0.964, 5507.553),
    Term::new(329.0, 5.9, 5223.694),
    Term::new(307.0, 0.299, 5573.143),
    Term::new(243.0, 4.273, 11790.629),
    Term::new(212.0, 5.847, 1577.344),
    Term::new(186.0, 5.022, 10977.079),
    Term::new(175.0, 3.012, 18849.228),
    Term::new(110.0, 5.055, 5486.778),
    Term::new(98.0, 0.89, 6069.78),
    Term::new(86.0, 5.69, 15720.84),
    Term::new(86.0, 1.27, 161000.69),
    Term::new(65.0, 0.27, 17260.15),
    Term::new(63.0, 0.92, 529.69),
    Term::new(57.0, 2.01, 83996.85),
    Term::new(56.0, 5.24, 71430.7),
    Term::new(49.0, 3.25, 2544.31),
    Term::new(47.0, 2.58, 775.52),
    Term::new(45.0, 5.54, 9437.76),
    Term::new(43.0, 6.01, 6275.96),
    Term::new(39.0, 5.36, 4694.0),
    Term::new(38.0, 2.39, 8827.39),
    Term::new(37.0, 0.83, 19651.05),
    Term::new(37.0, 4.9, 12139.55),
    Term::new(36.0, 1.67, 12036.46),
    Term::new(35.0, 1.84, 2942.46),
    Term::new(33.0, 0.24, 7084.9),
    Term::new(32.0, 0.18, 5088.63),
    Term::new(32.0, 1.78, 398.15),
    Term::new(28.0, 1.21, 6286.6),
    Term::new(28.0, 1.9, 6279.55),
    Term::new(26.0, 4.59, 10447.39),
];

#[rustfmt::skip]
const R1: &[Term] = &[
    Term::new(103019.0, 1.10749, 6283.07585),
    Term::new(1721.0, 1.0644, 12566.1517),
    Term::new(702.0, 3.142, 0.0),
    Term::new(32.0, 1.02, 18849.23),
    Term::new(31.0, 2.84, 5507.55),
    Term::new(25.0, 1.32, 5223.69),
    Term::new(18.0, 1.42, 1577.34),
    Term::new(10.0, 5.91, 10977.08),
    Term::new(9.0, 1.42, 6275.96),
    Term::new(9.0, 0.27, 5486.78),
];

#[rustfmt::skip]
const R2: &[Term] = &[
    Term::new(4359.0, 5.7846, 6283.0758),
    Term::new(124.0, 5.579, 12566.152),
    Term::new(12.0, 3.14, 0.0),
    Term::new(9.0, 3.63, 77713.77),
    Term::new(6.0, 1.87, 5573.14),
    Term::new(3.0, 5.47, 18849.23),
];

#[rustfmt::skip]
const R3: &[Term] = &[
    Term::new(145.0, 4.273, 6283.076),
    Term::new(7.0, 3.92, 12566.15),
];

#[rustfmt::skip]
const R4: &[Term] = &[
    Term::new(4.0, 2.56, 6283.08),
];

pub static EARTH: VsopSeries = VsopSeries {
    name: "Earth",
    longitude: [L0, L1, L2, L3, L4, L5],
    latitude: [B0, B1, &[], &[], &[], &[]],
    radius: [R0, R1, R2, R3, R4, &[]],
};
