//! Neptune: heliocentric ecliptic-of-date series, truncated VSOP87D.
//!
//! Amplitudes are in units of 1e-8 rad (L, B) or 1e-8 AU (R).

use crate::series::{Term, VsopSeries};

#[rustfmt::skip]
const L0: &[Term] = &[
    Term::new(531188633.0, 0.0, 0.0),
    Term::new(1798476.0, 2.9010127, 38.1330356),
    Term::new(1019728.0, 0.4858092, 1.4844727),
    Term::new(124532.0, 4.830081, 36.648563),
    Term::new(42064.0, 5.41055, 2.96895),
    Term::new(37715.0, 6.09222, 35.16409),
    Term::new(33785.0, 1.24489, 76.26607),
    Term::new(16483.0, 8e-05, 491.55793),
    Term::new(9199.0, 4.9375, 39.6175),
    Term::new(8994.0, 0.2746, 175.1661),
    Term::new(4216.0, 1.9871, 73.2971),
    Term::new(3365.0, 1.0359, 33.6796),
    Term::new(2285.0, 4.2061, 4.4534),
    Term::new(1434.0, 2.7834, 74.7816),
    Term::new(900.0, 2.076, 109.946),
    Term::new(745.0, 3.19, 71.813),
    Term::new(506.0, 5.748, 114.399),
    Term::new(400.0, 0.35, 1021.249),
    Term::new(345.0, 3.462, 41.102),
    Term::new(340.0, 3.304, 77.751),
    Term::new(323.0, 2.248, 32.195),
    Term::new(306.0, 0.497, 0.521),
    Term::new(287.0, 4.505, 0.048),
    Term::new(282.0, 2.246, 146.594),
    Term::new(267.0, 4.889, 0.963),
    Term::new(252.0, 5.782, 388.465),
    Term::new(245.0, 1.247, 9.561),
    Term::new(233.0, 2.505, 137.033),
    Term::new(227.0, 1.797, 453.425),
    Term::new(170.0, 3.324, 108.461),
    Term::new(151.0, 2.192, 33.94),
    Term::new(150.0, 2.997, 5.938),
    Term::new(148.0, 0.859, 111.43),
    Term::new(119.0, 3.677, 2.448),
    Term::new(109.0, 2.416, 183.243),
    Term::new(103.0, 0.041, 0.261),
    Term::new(103.0, 4.404, 70.328),
    Term::new(102.0, 5.705, 0.112),
];

#[rustfmt::skip]
const L1: &[Term] = &[
    Term::new(3837687717.0, 0.0, 0.0),
    Term::new(16604.0, 4.86319, 1.48447),
    Term::new(15807.0, 2.27923, 38.13304),
    Term::new(3335.0, 3.682, 76.2661),
    Term::new(1306.0, 3.6732, 2.9689),
    Term::new(605.0, 1.505, 35.164),
    Term::new(179.0, 3.453, 39.618),
    Term::new(107.0, 2.451, 4.453),
    Term::new(106.0, 2.755, 33.68),
    Term::new(73.0, 5.49, 36.65),
    Term::new(57.0, 1.86, 114.4),
    Term::new(57.0, 5.22, 0.52),
    Term::new(35.0, 4.52, 74.78),
    Term::new(32.0, 5.9, 77.75),
    Term::new(30.0, 3.67, 388.47),
    Term::new(29.0, 5.17, 9.56),
    Term::new(29.0, 5.17, 2.45),
    Term::new(26.0, 5.25, 168.05),
];

#[rustfmt::skip]
const L2: &[Term] = &[
    Term::new(53893.0, 0.0, 0.0),
    Term::new(296.0, 1.855, 1.484),
    Term::new(281.0, 1.191, 38.133),
    Term::new(270.0, 5.721, 76.266),
    Term::new(23.0, 1.21, 2.97),
    Term::new(9.0, 4.43, 35.16),
    Term::new(7.0, 0.54, 2.45),
];

#[rustfmt::skip]
const L3: &[Term] = &[
    Term::new(31.0, 0.0, 0.0),
    Term::new(15.0, 1.35, 76.27),
    Term::new(12.0, 6.04, 1.48),
    Term::new(12.0, 6.11, 38.13),
];

#[rustfmt::skip]
const L4: &[Term] = &[
    Term::new(114.0, 3.142, 0.0),
];

#[rustfmt::skip]
const B0: &[Term] = &[
    Term::new(3088623.0, 1.4410437, 38.1330356),
    Term::new(27789.0, 5.91272, 76.26607),
    Term::new(27624.0, 0.0, 0.0),
    Term::new(15448.0, 3.50877, 39.61751),
    Term::new(15355.0, 2.52124, 36.64856),
    Term::new(2000.0, 1.51, 74.7816),
    Term::new(1968.0, 4.3778, 1.4845),
    Term::new(1015.0, 3.2156, 35.1641),
    Term::new(606.0, 2.802, 73.297),
    Term::new(595.0, 2.129, 41.102),
    Term::new(589.0, 3.187, 2.969),
    Term::new(402.0, 4.169, 114.399),
    Term::new(280.0, 1.682, 77.751),
    Term::new(262.0, 3.767, 213.299),
    Term::new(254.0, 3.271, 453.425),
    Term::new(206.0, 4.257, 529.691),
    Term::new(140.0, 3.53, 137.033),
];

#[rustfmt::skip]
const B1: &[Term] = &[
    Term::new(227279.0, 3.807931, 38.133036),
    Term::new(1803.0, 1.9758, 76.2661),
    Term::new(1433.0, 3.1416, 0.0),
    Term::new(1386.0, 4.8256, 36.6486),
    Term::new(1073.0, 6.0805, 39.6175),
    Term::new(148.0, 2.858, 74.782),
    Term::new(136.0, 0.478, 1.484),
    Term::new(70.0, 6.19, 35.16),
    Term::new(52.0, 3.08, 41.1),
    Term::new(43.0, 3.6, 2.97),
];

#[rustfmt::skip]
const B2: &[Term] = &[
    Term::new(9691.0, 5.5712, 38.133),
    Term::new(79.0, 3.63, 76.27),
    Term::new(72.0, 0.45, 36.65),
    Term::new(59.0, 3.14, 0.0),
    Term::new(30.0, 1.61, 39.62),
    Term::new(6.0, 5.61, 74.78),
];

#[rustfmt::skip]
const B3: &[Term] = &[
    Term::new(273.0, 1.017, 38.133),
    Term::new(2.0, 0.0, 0.0),
    Term::new(2.0, 2.37, 36.65),
    Term::new(2.0, 5.33, 39.62),
];

#[rustfmt::skip]
const B4: &[Term] = &[
    Term::new(6.0, 2.67, 38.13),
];

#[rustfmt::skip]
const R0: &[Term] = &[
    Term::new(3007013206.0, 0.0, 0.0),
    Term::new(27062259.0, 1.32999459, 38.13303564),
    Term::new(1691764.0, 3.2518614, 36.6485629),
    Term::new(807831.0, 5.185928, 1.484473),
    Term::new(537761.0, 4.521139, 35.16409),
    Term::new(495726.0, 1.571057, 491.557929),
    Term::new(274572.0, 1.845523, 175.16606),
    Term::new(135134.0, 3.372206, 39.617508),
    Term::new(121802.0, 5.797544, 76.266071),
    Term::new(100895.0, 0.377027, 73.297126),
    Term::new(69792.0, 3.79617, 2.96895),
    Term::new(46688.0, 5.74938, 33.67962),
    Term::new(24594.0, 0.50802, 109.94569),
    Term::new(16939.0, 1.59422, 71.81265),
    Term::new(14230.0, 1.07786, 74.7816),
    Term::new(12012.0, 1.92062, 1021.24889),
    Term::new(8395.0, 0.6782, 146.5943),
    Term::new(7572.0, 1.0715, 388.4652),
    Term::new(5721.0, 2.5906, 4.4534),
    Term::new(4840.0, 1.9069, 41.102),
    Term::new(4483.0, 2.9057, 529.691),
    Term::new(4421.0, 1.7499, 108.4612),
    Term::new(4354.0, 0.6799, 32.1951),
    Term::new(4270.0, 3.4134, 453.4249),
    Term::new(3381.0, 0.8481, 183.2428),
    Term::new(2881.0, 1.986, 137.033),
    Term::new(2879.0, 3.6742, 350.3321),
    Term::new(2636.0, 3.0976, 213.2991),
    Term::new(2530.0, 5.7984, 490.0735),
    Term::new(2523.0, 0.4863, 493.0424),
    Term::new(2306.0, 2.8096, 70.3282),
    Term::new(2087.0, 0.6186, 33.9402),
];

#[rustfmt::skip]
const R1: &[Term] = &[
    Term::new(236339.0, 0.70498, 38.133036),
    Term::new(13220.0, 3.32015, 1.48447),
    Term::new(8622.0, 6.2163, 35.1641),
    Term::new(2702.0, 1.8814, 39.6175),
    Term::new(2155.0, 2.0943, 2.9689),
    Term::new(2153.0, 5.1687, 76.2661),
    Term::new(1603.0, 0.0, 0.0),
    Term::new(1464.0, 1.1842, 33.6796),
    Term::new(1136.0, 3.9189, 36.6486),
    Term::new(898.0, 5.241, 388.465),
    Term::new(790.0, 0.533, 168.053),
    Term::new(760.0, 0.021, 182.28),
    Term::new(607.0, 1.077, 1021.249),
    Term::new(572.0, 3.401, 484.444),
    Term::new(561.0, 2.887, 498.671),
];

#[rustfmt::skip]
const R2: &[Term] = &[
    Term::new(4247.0, 5.8991, 38.133),
    Term::new(218.0, 0.346, 1.484),
    Term::new(163.0, 2.239, 491.558),
    Term::new(156.0, 4.594, 39.618),
    Term::new(127.0, 2.848, 35.164),
];

#[rustfmt::skip]
const R3: &[Term] = &[
    Term::new(166.0, 4.552, 38.133),
];

pub static NEPTUNE: VsopSeries = VsopSeries {
    name: "Neptune",
    longitude: [L0, L1, L2, L3, L4, &[]],
    latitude: [B0, B1, B2, B3, B4, &[]],
    radius: [R0, R1, R2, R3, &[], &[]],
};
