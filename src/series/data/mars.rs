//! Mars: heliocentric ecliptic-of-date series, truncated VSOP87D.
//!
//! Amplitudes are in units of 1e-8 rad (L, B) or 1e-8 AU (R).

use crate::series::{Term, VsopSeries};

#[rustfmt::skip]
const L0: &[Term] = &[
    Term::new(620347712.0, 0.0, 0.0),
    Term::new(18656368.0, 5.050371, 3340.6124267),
    Term::new(1108217.0, 5.4009984, 6681.2248534),
    Term::new(91798.0, 5.75479, 10021.83728),
    Term::new(27745.0, 5.9705, 3.52312),
    Term::new(12316.0, 0.84956, 2810.92146),
    Term::new(10610.0, 2.93959, 2281.2305),
    Term::new(8927.0, 4.157, 0.0173),
    Term::new(8716.0, 6.1101, 13362.4497),
    Term::new(7775.0, 3.3397, 5621.8429),
    Term::new(6798.0, 0.3646, 398.149),
    Term::new(4161.0, 0.2281, 2942.4634),
    Term::new(3575.0, 1.6619, 2544.3144),
    Term::new(3075.0, 0.857, 191.4483),
    Term::new(2938.0, 6.0789, 0.0673),
    Term::new(2628.0, 0.6481, 3337.0893),
    Term::new(2580.0, 0.03, 3344.1355),
    Term::new(2389.0, 5.039, 796.298),
    Term::new(1799.0, 0.6563, 529.691),
    Term::new(1546.0, 2.9158, 1751.5395),
    Term::new(1528.0, 1.1498, 6151.5339),
    Term::new(1286.0, 3.068, 2146.1654),
    Term::new(1264.0, 3.6228, 5092.152),
    Term::new(1025.0, 3.6933, 8962.4553),
    Term::new(892.0, 0.183, 16703.062),
    Term::new(859.0, 2.401, 2914.014),
    Term::new(833.0, 4.495, 3340.63),
    Term::new(833.0, 2.464, 3340.595),
    Term::new(749.0, 3.822, 155.42),
    Term::new(724.0, 0.675, 3738.761),
    Term::new(713.0, 3.663, 1059.382),
    Term::new(655.0, 0.489, 3127.313),
    Term::new(636.0, 2.922, 8432.764),
    Term::new(553.0, 4.475, 1748.016),
    Term::new(550.0, 3.81, 0.98),
    Term::new(472.0, 3.625, 1194.447),
    Term::new(426.0, 0.554, 6283.076),
    Term::new(415.0, 0.497, 213.299),
    Term::new(312.0, 0.999, 6677.702),
    Term::new(307.0, 0.381, 6684.748),
    Term::new(302.0, 4.486, 3532.061),
    Term::new(299.0, 2.783, 6254.627),
    Term::new(293.0, 4.221, 20.775),
    Term::new(284.0, 5.769, 3149.164),
    Term::new(281.0, 5.882, 1349.867),
    Term::new(274.0, 0.542, 3340.545),
    Term::new(274.0, 0.134, 3340.68),
    Term::new(239.0, 5.372, 4136.91),
    Term::new(236.0, 5.755, 3333.499),
    Term::new(231.0, 1.282, 3870.303),
    Term::new(221.0, 3.505, 382.897),
    Term::new(204.0, 2.821, 1221.849),
    Term::new(193.0, 3.357, 3.59),
    Term::new(189.0, 1.491, 9492.146),
    Term::new(179.0, 1.006, 951.718),
    Term::new(174.0, 2.414, 553.569),
    Term::new(172.0, 0.439, 5486.778),
    Term::new(160.0, 3.949, 4562.461),
    Term::new(144.0, 1.419, 135.065),
    Term::new(140.0, 3.326, 2700.715),
    Term::new(138.0, 4.301, 7.114),
    Term::new(131.0, 4.045, 12303.068),
    Term::new(128.0, 2.208, 1592.596),
    Term::new(128.0, 1.807, 5088.629),
    Term::new(117.0, 3.128, 7903.073),
    Term::new(113.0, 3.701, 1589.073),
    Term::new(110.0, 1.052, 242.729),
    Term::new(105.0, 0.785, 8827.39),
    Term::new(100.0, 3.243, 11773.377),
];

#[rustfmt::skip]
const L1: &[Term] = &[
    Term::new(334085627474.0, 0.0, 0.0),
    Term::new(1458227.0, 3.6042605, 3340.6124267),
    Term::new(164901.0, 3.926313, 6681.224853),
    Term::new(19963.0, 4.26594, 10021.83728),
    Term::new(3452.0, 4.7321, 3.5231),
    Term::new(2485.0, 4.6128, 13362.4497),
    Term::new(842.0, 4.459, 2281.23),
    Term::new(538.0, 5.016, 398.149),
    Term::new(521.0, 4.994, 3344.136),
    Term::new(433.0, 2.561, 191.448),
    Term::new(430.0, 5.316, 155.42),
    Term::new(382.0, 3.539, 796.298),
    Term::new(314.0, 4.963, 16703.062),
    Term::new(283.0, 3.16, 2544.314),
    Term::new(206.0, 4.569, 2146.165),
    Term::new(169.0, 1.329, 3337.089),
    Term::new(158.0, 4.185, 1751.54),
    Term::new(134.0, 2.233, 0.98),
    Term::new(134.0, 5.974, 1748.016),
    Term::new(118.0, 6.024, 6151.534),
    Term::new(117.0, 2.213, 1059.382),
    Term::new(114.0, 2.129, 1194.447),
    Term::new(114.0, 5.428, 3738.761),
    Term::new(91.0, 1.1, 1349.87),
    Term::new(85.0, 3.91, 553.57),
    Term::new(83.0, 5.3, 6684.75),
    Term::new(81.0, 4.43, 529.69),
    Term::new(80.0, 2.25, 8962.46),
    Term::new(73.0, 2.5, 951.72),
    Term::new(73.0, 5.84, 242.73),
    Term::new(71.0, 3.86, 2914.01),
    Term::new(68.0, 5.02, 382.9),
    Term::new(65.0, 1.02, 3340.6),
    Term::new(65.0, 3.05, 3340.63),
    Term::new(62.0, 4.15, 3149.16),
    Term::new(57.0, 3.89, 4136.91),
    Term::new(48.0, 4.87, 213.3),
    Term::new(48.0, 1.18, 3333.5),
    Term::new(47.0, 1.31, 3185.19),
    Term::new(41.0, 0.71, 1592.6),
    Term::new(40.0, 2.73, 7.11),
    Term::new(40.0, 5.32, 20043.67),
    Term::new(33.0, 5.41, 6283.08),
    Term::new(28.0, 0.05, 9492.15),
    Term::new(27.0, 3.89, 1221.85),
    Term::new(27.0, 5.11, 2700.72),
];

#[rustfmt::skip]
const L2: &[Term] = &[
    Term::new(58016.0, 2.04979, 3340.61243),
    Term::new(54188.0, 0.0, 0.0),
    Term::new(13908.0, 2.45742, 6681.22485),
    Term::new(2465.0, 2.8, 10021.8373),
    Term::new(398.0, 3.141, 13362.45),
    Term::new(222.0, 3.194, 3.523),
    Term::new(121.0, 0.543, 155.42),
    Term::new(62.0, 3.49, 16703.06),
    Term::new(54.0, 3.54, 3344.14),
    Term::new(34.0, 6.0, 2281.23),
    Term::new(32.0, 4.14, 191.45),
    Term::new(30.0, 2.0, 796.3),
    Term::new(23.0, 4.33, 242.73),
    Term::new(22.0, 3.45, 398.15),
    Term::new(20.0, 5.42, 553.57),
    Term::new(16.0, 0.66, 0.98),
    Term::new(16.0, 6.11, 2146.17),
    Term::new(16.0, 1.22, 1748.02),
    Term::new(15.0, 6.1, 3185.19),
    Term::new(14.0, 4.02, 951.72),
    Term::new(14.0, 2.62, 1349.87),
    Term::new(13.0, 0.6, 1194.45),
    Term::new(12.0, 3.86, 6684.75),
    Term::new(11.0, 4.72, 2544.31),
    Term::new(10.0, 0.25, 382.9),
    Term::new(9.0, 0.68, 1059.38),
    Term::new(9.0, 3.83, 20043.67),
    Term::new(9.0, 3.88, 3738.76),
    Term::new(8.0, 5.46, 1751.54),
    Term::new(7.0, 2.58, 3149.16),
    Term::new(7.0, 2.38, 4136.91),
    Term::new(6.0, 5.48, 1592.6),
    Term::new(6.0, 2.34, 3097.88),
];

#[rustfmt::skip]
const L3: &[Term] = &[
    Term::new(1482.0, 0.4443, 3340.6124),
    Term::new(662.0, 0.885, 6681.225),
    Term::new(188.0, 1.288, 10021.837),
    Term::new(41.0, 1.65, 13362.45),
    Term::new(26.0, 0.0, 0.0),
    Term::new(23.0, 2.05, 155.42),
    Term::new(10.0, 1.58, 3.52),
    Term::new(8.0, 2.0, 16703.06),
    Term::new(5.0, 2.82, 242.73),
    Term::new(4.0, 2.02, 3344.14),
    Term::new(3.0, 4.59, 3185.19),
    Term::new(3.0, 0.65, 553.57),
];

#[rustfmt::skip]
const L4: &[Term] = &[
    Term::new(114.0, 3.1416, 0.0),
    Term::new(29.0, 5.64, 6681.22),
    Term::new(24.0, 5.14, 3340.61),
    Term::new(11.0, 6.03, 10021.84),
    Term::new(3.0, 0.13, 13362.45),
    Term::new(3.0, 3.56, 155.42),
    Term::new(1.0, 0.49, 16703.06),
    Term::new(1.0, 1.32, 242.73),
];

#[rustfmt::skip]
const L5: &[Term] = &[
    Term::new(1.0, 3.14, 0.0),
    Term::new(1.0, 4.04, 6681.22),
];

#[rustfmt::skip]
const B0: &[Term] = &[
    Term::new(3197135.0, 3.7683204, 3340.6124267),
    Term::new(298033.0, 4.10617, 6681.224853),
    Term::new(289105.0, 0.0, 0.0),
    Term::new(31366.0, 4.44651, 10021.83728),
    Term::new(3484.0, 4.7881, 13362.4497),
    Term::new(443.0, 5.026, 3344.136),
    Term::new(443.0, 5.652, 3337.089),
    Term::new(399.0, 5.131, 16703.062),
    Term::new(293.0, 3.793, 2281.23),
    Term::new(182.0, 6.136, 6151.534),
    Term::new(163.0, 4.264, 529.691),
    Term::new(160.0, 2.232, 1059.382),
    Term::new(149.0, 2.165, 5621.843),
    Term::new(143.0, 1.182, 3340.595),
    Term::new(143.0, 3.213, 3340.63),
    Term::new(139.0, 2.418, 8962.455),
];

#[rustfmt::skip]
const B1: &[Term] = &[
    Term::new(350069.0, 5.368478, 3340.612427),
    Term::new(14116.0, 3.14159, 0.0),
    Term::new(9671.0, 5.4788, 6681.2249),
    Term::new(1472.0, 3.2021, 10021.8373),
    Term::new(426.0, 3.408, 13362.45),
    Term::new(102.0, 0.776, 3337.089),
    Term::new(79.0, 3.72, 16703.06),
    Term::new(33.0, 3.46, 5621.84),
    Term::new(26.0, 2.48, 2281.23),
];

#[rustfmt::skip]
const B2: &[Term] = &[
    Term::new(16727.0, 0.60221, 3340.61243),
    Term::new(4987.0, 3.1416, 0.0),
    Term::new(302.0, 5.559, 6681.225),
    Term::new(26.0, 1.9, 13362.45),
    Term::new(21.0, 0.92, 10021.84),
    Term::new(12.0, 2.24, 3340.6),
    Term::new(8.0, 2.25, 16703.06),
];

#[rustfmt::skip]
const B3: &[Term] = &[
    Term::new(607.0, 1.981, 3340.612),
    Term::new(43.0, 0.0, 0.0),
    Term::new(14.0, 1.8, 6681.22),
    Term::new(3.0, 3.45, 10021.84),
];

#[rustfmt::skip]
const B4: &[Term] = &[
    Term::new(13.0, 0.0, 0.0),
    Term::new(11.0, 3.46, 3340.61),
    Term::new(1.0, 0.5, 6681.22),
];

#[rustfmt::skip]
const R0: &[Term] = &[
    Term::new(153033488.0, 0.0, 0.0),
    Term::new(14184953.0, 3.47971284, 3340.6124267),
    Term::new(660776.0, 3.817834, 6681.224853),
    Term::new(46179.0, 4.15595, 10021.83728),
    Term::new(8110.0, 5.5596, 2810.9215),
    Term::new(7485.0, 1.7724, 5621.8429),
    Term::new(5523.0, 1.3644, 2281.2305),
    Term::new(3825.0, 4.4941, 13362.4497),
    Term::new(2484.0, 4.9255, 2942.4634),
    Term::new(2307.0, 0.0908, 2544.3144),
    Term::new(1999.0, 5.3606, 3337.0893),
    Term::new(1960.0, 4.7425, 3344.1355),
    Term::new(1167.0, 2.1126, 5092.152),
    Term::new(1103.0, 5.0091, 398.149),
    Term::new(992.0, 5.839, 6151.534),
    Term::new(899.0, 4.408, 529.691),
    Term::new(807.0, 2.102, 1059.382),
    Term::new(798.0, 3.448, 796.298),
    Term::new(741.0, 1.499, 2146.165),
    Term::new(726.0, 1.245, 8432.764),
    Term::new(692.0, 2.134, 8962.455),
    Term::new(633.0, 0.894, 3340.595),
    Term::new(633.0, 2.924, 3340.63),
    Term::new(630.0, 1.287, 1751.54),
    Term::new(574.0, 0.829, 2914.014),
    Term::new(526.0, 5.383, 3738.761),
    Term::new(473.0, 5.199, 3127.313),
    Term::new(348.0, 4.832, 16703.062),
    Term::new(284.0, 2.907, 3532.061),
    Term::new(280.0, 5.257, 6283.076),
    Term::new(276.0, 1.218, 6254.627),
    Term::new(275.0, 2.908, 1748.016),
    Term::new(270.0, 3.764, 5884.927),
    Term::new(239.0, 2.037, 1194.447),
    Term::new(234.0, 5.105, 5486.778),
    Term::new(228.0, 3.255, 6872.673),
    Term::new(223.0, 4.199, 3149.164),
    Term::new(219.0, 5.583, 191.448),
    Term::new(208.0, 5.255, 3340.545),
    Term::new(208.0, 4.846, 3340.68),
    Term::new(186.0, 5.699, 6677.702),
    Term::new(183.0, 5.081, 6684.748),
    Term::new(179.0, 4.184, 3333.499),
    Term::new(176.0, 5.953, 3870.303),
    Term::new(164.0, 3.799, 4136.91),
];

#[rustfmt::skip]
const R1: &[Term] = &[
    Term::new(1107433.0, 2.0325052, 3340.6124267),
    Term::new(103176.0, 2.370718, 6681.224853),
    Term::new(12877.0, 0.0, 0.0),
    Term::new(10816.0, 2.70888, 10021.83728),
    Term::new(1195.0, 3.047, 13362.4497),
    Term::new(439.0, 2.888, 2281.23),
    Term::new(396.0, 3.423, 3344.136),
    Term::new(183.0, 1.584, 2544.314),
    Term::new(136.0, 3.385, 16703.062),
    Term::new(128.0, 6.043, 3337.089),
    Term::new(128.0, 0.63, 1059.382),
    Term::new(127.0, 1.954, 796.298),
    Term::new(118.0, 2.998, 2146.165),
    Term::new(88.0, 3.42, 398.15),
    Term::new(83.0, 3.86, 3738.76),
    Term::new(76.0, 4.45, 6151.53),
    Term::new(72.0, 2.76, 529.69),
    Term::new(67.0, 2.55, 1751.54),
    Term::new(66.0, 4.41, 1748.02),
    Term::new(58.0, 0.54, 1194.45),
    Term::new(54.0, 0.68, 8962.46),
    Term::new(51.0, 3.73, 6684.75),
    Term::new(49.0, 5.73, 3340.6),
    Term::new(49.0, 1.48, 3340.63),
    Term::new(48.0, 2.58, 3149.16),
    Term::new(48.0, 2.29, 2914.01),
    Term::new(39.0, 2.32, 4136.91),
];

#[rustfmt::skip]
const R2: &[Term] = &[
    Term::new(44242.0, 0.47931, 3340.61243),
    Term::new(8138.0, 0.87, 6681.2249),
    Term::new(1275.0, 1.2259, 10021.8373),
    Term::new(187.0, 1.573, 13362.45),
    Term::new(52.0, 3.14, 0.0),
    Term::new(41.0, 1.97, 3344.14),
    Term::new(27.0, 1.92, 16703.06),
    Term::new(18.0, 4.43, 2281.23),
    Term::new(12.0, 4.53, 3185.19),
    Term::new(10.0, 5.39, 1059.38),
    Term::new(10.0, 0.42, 796.3),
];

#[rustfmt::skip]
const R3: &[Term] = &[
    Term::new(1113.0, 5.1499, 3340.6124),
    Term::new(424.0, 5.613, 6681.225),
    Term::new(100.0, 5.997, 10021.837),
    Term::new(20.0, 0.08, 13362.45),
    Term::new(5.0, 3.14, 0.0),
    Term::new(3.0, 0.43, 16703.06),
];

#[rustfmt::skip]
const R4: &[Term] = &[
    Term::new(20.0, 3.58, 3340.61),
    Term::new(16.0, 4.05, 6681.22),
    Term::new(6.0, 4.46, 10021.84),
    Term::new(2.0, 4.84, 13362.45),
];

pub static MARS: VsopSeries = VsopSeries {
    name: "Mars",
    longitude: [L0, L1, L2, L3, L4, L5],
    latitude: [B0, B1, B2, B3, B4, &[]],
    radius: [R0, R1, R2, R3, R4, &[]],
};
