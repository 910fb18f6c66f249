//! Jupiter: heliocentric ecliptic-of-date series, truncated VSOP87D.
//!
//! Amplitudes are in units of 1e-8 rad (L, B) or 1e-8 AU (R).

use crate::series::{Term, VsopSeries};

#[rustfmt::skip]
const L0: &[Term] = &[
    Term::new(59954691.0, 0.0, 0.0),
    Term::new(9695899.0, 5.0619179, 529.6909651),
    Term::new(573610.0, 1.444062, 7.113547),
    Term::new(306389.0, 5.417347, 1059.38193),
    Term::new(97178.0, 4.14265, 632.78374),
    Term::new(72903.0, 3.64043, 522.57742),
    Term::new(64264.0, 3.41145, 103.09277),
    Term::new(39806.0, 2.29377, 419.48464),
    Term::new(38858.0, 1.27232, 316.39187),
    Term::new(27965.0, 1.78455, 536.80451),
    Term::new(13590.0, 5.77481, 1589.0729),
    Term::new(8769.0, 3.63, 949.1756),
    Term::new(8246.0, 3.5823, 206.1855),
    Term::new(7368.0, 5.081, 735.8765),
    Term::new(6263.0, 0.025, 213.2991),
    Term::new(6114.0, 4.5132, 1162.4747),
    Term::new(5305.0, 4.1863, 1052.2684),
    Term::new(5305.0, 1.3067, 14.2271),
    Term::new(4905.0, 1.3208, 110.2063),
    Term::new(4647.0, 4.6996, 3.9322),
    Term::new(3045.0, 4.3168, 426.5982),
    Term::new(2610.0, 1.5667, 846.0828),
    Term::new(2028.0, 1.0638, 3.1814),
    Term::new(1921.0, 0.9717, 639.8973),
    Term::new(1765.0, 2.1415, 1066.4955),
    Term::new(1723.0, 3.8804, 1265.5675),
    Term::new(1633.0, 3.582, 515.4639),
    Term::new(1432.0, 4.2968, 625.6702),
    Term::new(973.0, 4.098, 95.979),
    Term::new(884.0, 2.437, 412.371),
    Term::new(733.0, 6.085, 838.969),
    Term::new(731.0, 3.806, 1581.959),
    Term::new(709.0, 1.293, 742.99),
    Term::new(692.0, 6.134, 2118.764),
    Term::new(614.0, 4.109, 1478.867),
    Term::new(582.0, 4.54, 309.278),
    Term::new(495.0, 3.756, 323.505),
    Term::new(441.0, 2.958, 454.909),
    Term::new(417.0, 1.036, 2.448),
    Term::new(390.0, 4.897, 1692.166),
    Term::new(376.0, 4.703, 1368.66),
    Term::new(341.0, 5.715, 533.623),
    Term::new(330.0, 4.74, 0.048),
    Term::new(262.0, 1.877, 0.963),
    Term::new(261.0, 0.82, 380.128),
    Term::new(257.0, 3.724, 199.072),
    Term::new(244.0, 5.22, 728.763),
    Term::new(235.0, 1.227, 909.819),
    Term::new(220.0, 1.651, 543.918),
    Term::new(207.0, 1.855, 525.759),
    Term::new(202.0, 1.807, 1375.774),
    Term::new(197.0, 5.293, 1155.361),
    Term::new(175.0, 3.73, 942.062),
    Term::new(175.0, 3.226, 1898.351),
    Term::new(175.0, 5.91, 956.289),
    Term::new(158.0, 4.365, 1795.258),
    Term::new(151.0, 3.906, 74.782),
    Term::new(149.0, 4.377, 1685.052),
    Term::new(141.0, 3.136, 491.558),
    Term::new(138.0, 1.318, 1169.588),
    Term::new(131.0, 4.169, 1045.155),
    Term::new(117.0, 2.5, 1596.186),
    Term::new(117.0, 3.389, 0.521),
    Term::new(106.0, 4.554, 526.51),
];

#[rustfmt::skip]
const L1: &[Term] = &[
    Term::new(52993480757.0, 0.0, 0.0),
    Term::new(489741.0, 4.220667, 529.690965),
    Term::new(228919.0, 6.026475, 7.113547),
    Term::new(27655.0, 4.57266, 1059.38193),
    Term::new(20721.0, 5.45939, 522.57742),
    Term::new(12106.0, 0.16986, 536.80451),
    Term::new(6068.0, 4.4242, 103.0928),
    Term::new(5434.0, 3.9848, 419.4846),
    Term::new(4238.0, 5.8901, 14.2271),
    Term::new(2212.0, 5.2677, 206.1855),
    Term::new(1746.0, 4.9267, 1589.0729),
    Term::new(1296.0, 5.5513, 3.1814),
    Term::new(1173.0, 5.8565, 1052.2684),
    Term::new(1163.0, 0.5145, 3.9322),
    Term::new(1099.0, 5.307, 515.4639),
    Term::new(1007.0, 0.4648, 735.8765),
    Term::new(1004.0, 3.1504, 426.5982),
    Term::new(848.0, 5.758, 110.206),
    Term::new(827.0, 4.803, 213.299),
    Term::new(816.0, 0.586, 1066.496),
    Term::new(725.0, 5.518, 639.897),
    Term::new(568.0, 5.989, 625.67),
    Term::new(474.0, 4.132, 412.371),
    Term::new(413.0, 5.737, 95.979),
    Term::new(345.0, 4.242, 632.784),
    Term::new(336.0, 3.732, 1162.475),
    Term::new(234.0, 4.035, 949.176),
    Term::new(234.0, 6.243, 309.278),
    Term::new(199.0, 1.505, 838.969),
    Term::new(195.0, 2.219, 323.505),
    Term::new(187.0, 6.086, 742.99),
    Term::new(184.0, 6.28, 543.918),
    Term::new(171.0, 5.417, 199.072),
    Term::new(131.0, 0.626, 728.763),
    Term::new(115.0, 0.68, 846.083),
    Term::new(115.0, 5.286, 2118.764),
    Term::new(108.0, 4.493, 956.289),
    Term::new(80.0, 5.82, 1045.15),
    Term::new(72.0, 5.34, 942.06),
    Term::new(70.0, 5.97, 532.87),
    Term::new(67.0, 5.73, 21.34),
    Term::new(66.0, 0.13, 526.51),
    Term::new(65.0, 6.09, 1581.96),
    Term::new(59.0, 0.59, 1155.36),
    Term::new(58.0, 0.99, 1596.19),
    Term::new(57.0, 5.97, 1169.59),
    Term::new(57.0, 1.41, 533.62),
    Term::new(55.0, 5.43, 10.29),
    Term::new(52.0, 5.73, 117.32),
    Term::new(52.0, 0.23, 1368.66),
    Term::new(50.0, 6.08, 525.76),
    Term::new(47.0, 3.63, 1478.87),
    Term::new(47.0, 0.51, 1265.57),
    Term::new(40.0, 4.16, 1692.17),
    Term::new(34.0, 0.1, 302.16),
    Term::new(33.0, 5.04, 220.41),
    Term::new(32.0, 5.37, 508.35),
    Term::new(29.0, 5.42, 1272.68),
    Term::new(29.0, 3.36, 4.67),
    Term::new(29.0, 0.76, 88.87),
    Term::new(25.0, 1.61, 831.86),
];

#[rustfmt::skip]
const L2: &[Term] = &[
    Term::new(47234.0, 4.32148, 7.11355),
    Term::new(38966.0, 0.0, 0.0),
    Term::new(30629.0, 2.93021, 529.69097),
    Term::new(3189.0, 1.055, 522.5774),
    Term::new(2729.0, 4.8455, 536.8045),
    Term::new(2723.0, 3.4141, 1059.3819),
    Term::new(1721.0, 4.1873, 14.2271),
    Term::new(383.0, 5.768, 419.485),
    Term::new(378.0, 0.76, 515.464),
    Term::new(367.0, 6.055, 103.093),
    Term::new(337.0, 3.786, 3.181),
    Term::new(308.0, 0.694, 206.186),
    Term::new(218.0, 3.814, 1589.073),
    Term::new(199.0, 5.34, 1066.495),
    Term::new(197.0, 2.484, 3.932),
    Term::new(156.0, 1.406, 1052.268),
    Term::new(146.0, 3.814, 639.897),
    Term::new(142.0, 1.634, 426.598),
    Term::new(130.0, 5.837, 412.371),
    Term::new(117.0, 1.414, 625.67),
    Term::new(97.0, 4.03, 110.21),
    Term::new(91.0, 1.11, 95.98),
    Term::new(87.0, 2.52, 632.78),
    Term::new(79.0, 4.64, 543.92),
    Term::new(72.0, 2.22, 735.88),
    Term::new(58.0, 0.83, 199.07),
    Term::new(57.0, 3.12, 213.3),
    Term::new(49.0, 1.67, 309.28),
    Term::new(40.0, 4.02, 21.34),
    Term::new(40.0, 0.62, 323.51),
    Term::new(36.0, 2.33, 728.76),
    Term::new(29.0, 3.61, 10.29),
    Term::new(28.0, 3.24, 838.97),
    Term::new(26.0, 4.5, 742.99),
    Term::new(26.0, 2.51, 1162.47),
    Term::new(25.0, 1.22, 1045.15),
    Term::new(24.0, 3.01, 956.29),
    Term::new(19.0, 4.29, 532.87),
    Term::new(18.0, 0.81, 508.35),
    Term::new(17.0, 4.2, 2118.76),
    Term::new(17.0, 1.83, 526.51),
    Term::new(15.0, 5.81, 1596.19),
    Term::new(15.0, 0.68, 942.06),
    Term::new(15.0, 4.0, 117.32),
    Term::new(14.0, 5.95, 316.39),
    Term::new(14.0, 1.8, 302.16),
    Term::new(13.0, 2.52, 88.87),
    Term::new(13.0, 4.37, 1169.59),
    Term::new(11.0, 4.44, 525.76),
    Term::new(10.0, 1.72, 1581.96),
    Term::new(9.0, 2.18, 1155.36),
    Term::new(9.0, 3.29, 220.41),
    Term::new(9.0, 3.32, 831.86),
    Term::new(8.0, 5.76, 846.08),
    Term::new(8.0, 2.71, 533.62),
    Term::new(7.0, 2.18, 1265.57),
    Term::new(6.0, 0.5, 949.18),
];

#[rustfmt::skip]
const L3: &[Term] = &[
    Term::new(6502.0, 2.5986, 7.1135),
    Term::new(1357.0, 1.3464, 529.691),
    Term::new(471.0, 2.475, 14.227),
    Term::new(417.0, 3.245, 536.805),
    Term::new(353.0, 2.974, 522.577),
    Term::new(155.0, 2.076, 1059.382),
    Term::new(87.0, 2.51, 515.46),
    Term::new(44.0, 0.0, 0.0),
    Term::new(34.0, 3.83, 1066.5),
    Term::new(28.0, 2.45, 206.19),
    Term::new(24.0, 1.28, 412.37),
    Term::new(23.0, 2.98, 543.92),
    Term::new(20.0, 2.1, 639.9),
    Term::new(20.0, 1.4, 419.48),
    Term::new(19.0, 1.59, 103.09),
    Term::new(17.0, 2.3, 21.34),
    Term::new(17.0, 2.6, 1589.07),
    Term::new(16.0, 3.15, 625.67),
    Term::new(16.0, 3.36, 1052.27),
    Term::new(13.0, 2.76, 95.98),
    Term::new(13.0, 2.54, 199.07),
    Term::new(13.0, 6.27, 426.6),
    Term::new(9.0, 1.76, 10.29),
    Term::new(9.0, 2.27, 110.21),
    Term::new(7.0, 3.43, 309.28),
    Term::new(7.0, 4.04, 728.76),
    Term::new(6.0, 2.52, 508.35),
    Term::new(5.0, 2.91, 1045.15),
];

#[rustfmt::skip]
const L4: &[Term] = &[
    Term::new(669.0, 0.853, 7.114),
    Term::new(114.0, 3.142, 0.0),
    Term::new(100.0, 0.743, 14.227),
    Term::new(50.0, 1.65, 536.8),
    Term::new(44.0, 5.82, 529.69),
    Term::new(32.0, 4.86, 522.58),
    Term::new(15.0, 4.29, 515.46),
    Term::new(9.0, 0.71, 1059.38),
    Term::new(5.0, 1.3, 543.92),
    Term::new(4.0, 2.32, 1066.5),
    Term::new(4.0, 0.48, 21.34),
    Term::new(3.0, 3.0, 412.37),
    Term::new(2.0, 0.4, 639.9),
    Term::new(2.0, 4.26, 199.07),
    Term::new(2.0, 4.91, 625.67),
    Term::new(2.0, 4.26, 206.19),
    Term::new(1.0, 5.26, 1052.27),
    Term::new(1.0, 4.72, 95.98),
    Term::new(1.0, 1.29, 1589.07),
];

#[rustfmt::skip]
const L5: &[Term] = &[
    Term::new(50.0, 5.26, 7.11),
    Term::new(16.0, 5.25, 14.23),
    Term::new(4.0, 0.01, 536.8),
    Term::new(2.0, 1.1, 522.58),
    Term::new(1.0, 3.14, 0.0),
];

#[rustfmt::skip]
const B0: &[Term] = &[
    Term::new(2268616.0, 3.5585261, 529.6909651),
    Term::new(110090.0, 0.0, 0.0),
    Term::new(109972.0, 3.908093, 1059.38193),
    Term::new(8101.0, 3.6051, 522.5774),
    Term::new(6438.0, 0.3063, 536.8045),
    Term::new(6044.0, 4.2588, 1589.0729),
    Term::new(1107.0, 2.9853, 1162.4747),
    Term::new(944.0, 1.675, 426.598),
    Term::new(942.0, 2.936, 1052.268),
    Term::new(894.0, 1.754, 7.114),
    Term::new(836.0, 5.179, 103.093),
    Term::new(767.0, 2.155, 632.784),
    Term::new(684.0, 3.678, 213.299),
    Term::new(629.0, 0.643, 1066.495),
    Term::new(559.0, 0.014, 846.083),
    Term::new(532.0, 2.703, 110.206),
    Term::new(464.0, 1.173, 949.176),
    Term::new(431.0, 2.608, 419.485),
    Term::new(351.0, 4.611, 2118.764),
    Term::new(132.0, 4.778, 742.99),
    Term::new(123.0, 3.35, 1692.166),
    Term::new(116.0, 1.387, 323.505),
    Term::new(115.0, 5.049, 316.392),
    Term::new(104.0, 3.701, 515.464),
    Term::new(103.0, 2.319, 1478.867),
    Term::new(102.0, 3.153, 1581.959),
];

#[rustfmt::skip]
const B1: &[Term] = &[
    Term::new(177352.0, 5.701665, 529.690965),
    Term::new(3230.0, 5.7794, 1059.3819),
    Term::new(3081.0, 5.4746, 522.5774),
    Term::new(2212.0, 4.7348, 536.8045),
    Term::new(1694.0, 3.1416, 0.0),
    Term::new(346.0, 4.746, 1052.268),
    Term::new(234.0, 5.189, 1066.495),
    Term::new(196.0, 6.186, 7.114),
    Term::new(150.0, 3.927, 1589.073),
    Term::new(114.0, 3.439, 632.784),
    Term::new(97.0, 2.91, 949.18),
    Term::new(82.0, 5.08, 1162.47),
    Term::new(77.0, 2.51, 103.09),
    Term::new(77.0, 0.61, 419.48),
    Term::new(74.0, 5.5, 515.46),
    Term::new(61.0, 5.45, 213.3),
    Term::new(50.0, 3.95, 735.88),
    Term::new(46.0, 0.54, 110.21),
    Term::new(45.0, 1.9, 846.08),
    Term::new(37.0, 4.7, 543.92),
    Term::new(36.0, 6.11, 316.39),
    Term::new(32.0, 4.92, 1581.96),
];

#[rustfmt::skip]
const B2: &[Term] = &[
    Term::new(8094.0, 1.4632, 529.691),
    Term::new(813.0, 3.1416, 0.0),
    Term::new(742.0, 0.957, 522.577),
    Term::new(399.0, 2.899, 536.805),
    Term::new(342.0, 1.447, 1059.382),
    Term::new(74.0, 0.41, 1052.27),
    Term::new(46.0, 3.48, 1066.5),
    Term::new(30.0, 1.93, 1589.07),
    Term::new(29.0, 0.99, 515.46),
    Term::new(23.0, 4.27, 7.11),
    Term::new(14.0, 2.92, 543.92),
    Term::new(12.0, 5.22, 632.78),
    Term::new(11.0, 4.88, 949.18),
    Term::new(6.0, 6.21, 1045.15),
];

#[rustfmt::skip]
const B3: &[Term] = &[
    Term::new(252.0, 3.381, 529.691),
    Term::new(122.0, 2.733, 522.577),
    Term::new(49.0, 1.04, 536.81),
    Term::new(11.0, 2.31, 1059.38),
    Term::new(8.0, 2.77, 515.46),
    Term::new(7.0, 4.25, 1052.27),
    Term::new(6.0, 1.78, 1066.5),
    Term::new(4.0, 1.13, 543.92),
    Term::new(3.0, 3.14, 0.0),
];

#[rustfmt::skip]
const B4: &[Term] = &[
    Term::new(15.0, 4.53, 522.58),
    Term::new(5.0, 4.47, 529.69),
    Term::new(4.0, 5.44, 536.81),
    Term::new(3.0, 0.0, 0.0),
    Term::new(2.0, 4.52, 515.46),
    Term::new(1.0, 4.2, 1052.27),
];

#[rustfmt::skip]
const B5: &[Term] = &[
    Term::new(1.0, 0.09, 522.58),
];

#[rustfmt::skip]
const R0: &[Term] = &[
    Term::new(520887429.0, 0.0, 0.0),
    Term::new(25209327.0, 3.4910864, 529.69096509),
    Term::new(610600.0, 3.841154, 1059.38193),
    Term::new(282029.0, 2.574199, 632.783739),
    Term::new(187647.0, 2.075904, 522.577418),
    Term::new(86793.0, 0.71001, 419.48464),
    Term::new(72063.0, 0.21466, 536.80451),
    Term::new(65517.0, 5.97996, 316.39187),
    Term::new(30135.0, 2.16132, 949.17561),
    Term::new(29135.0, 1.67759, 103.09277),
    Term::new(23947.0, 0.27458, 7.11355),
    Term::new(23453.0, 3.54023, 735.87651),
    Term::new(22284.0, 4.19363, 1589.0729),
    Term::new(13033.0, 2.96043, 1162.4747),
    Term::new(12749.0, 2.7155, 1052.26838),
    Term::new(9703.0, 1.9067, 206.1855),
    Term::new(9161.0, 4.4135, 213.2991),
    Term::new(7895.0, 2.4791, 426.5982),
    Term::new(7058.0, 2.1818, 1265.5675),
    Term::new(6138.0, 6.2642, 846.0828),
    Term::new(5477.0, 5.6573, 639.8973),
    Term::new(4170.0, 2.0161, 515.4639),
    Term::new(4137.0, 2.7222, 625.6702),
    Term::new(3503.0, 0.5653, 1066.4955),
    Term::new(2617.0, 2.0099, 1581.9593),
    Term::new(2500.0, 4.5518, 838.9693),
    Term::new(2128.0, 6.1275, 742.9901),
    Term::new(1912.0, 0.8562, 412.3711),
    Term::new(1611.0, 3.0887, 1368.6603),
    Term::new(1479.0, 2.6803, 1478.8666),
    Term::new(1231.0, 1.8904, 323.5054),
    Term::new(1217.0, 1.8017, 110.2063),
    Term::new(1015.0, 1.3867, 454.9094),
    Term::new(999.0, 2.872, 309.278),
    Term::new(961.0, 4.549, 2118.764),
    Term::new(886.0, 4.148, 533.623),
    Term::new(821.0, 1.593, 1898.351),
    Term::new(812.0, 5.941, 909.819),
    Term::new(777.0, 3.677, 728.763),
    Term::new(727.0, 3.988, 1155.361),
    Term::new(655.0, 2.791, 1685.052),
    Term::new(654.0, 3.382, 1692.166),
    Term::new(621.0, 4.823, 956.289),
    Term::new(615.0, 2.276, 942.062),
    Term::new(562.0, 0.081, 543.918),
    Term::new(542.0, 0.284, 525.759),
];

#[rustfmt::skip]
const R1: &[Term] = &[
    Term::new(1271802.0, 2.6493751, 529.6909651),
    Term::new(61662.0, 3.00076, 1059.38193),
    Term::new(53444.0, 3.89718, 522.57742),
    Term::new(41390.0, 0.0, 0.0),
    Term::new(31185.0, 4.88277, 536.80451),
    Term::new(11847.0, 2.4133, 419.48464),
    Term::new(9166.0, 4.7598, 7.1135),
    Term::new(3404.0, 3.3469, 1589.0729),
    Term::new(3203.0, 5.2108, 735.8765),
    Term::new(3176.0, 2.793, 103.0928),
    Term::new(2806.0, 3.7422, 515.4639),
    Term::new(2677.0, 4.3305, 1052.2684),
    Term::new(2600.0, 3.6344, 206.1855),
    Term::new(2412.0, 1.4695, 426.5982),
    Term::new(2101.0, 3.9276, 639.8973),
    Term::new(1646.0, 5.3095, 1066.4955),
    Term::new(1641.0, 4.4163, 625.6702),
    Term::new(1050.0, 3.1611, 213.2991),
    Term::new(1025.0, 2.5543, 412.3711),
    Term::new(806.0, 2.678, 632.784),
    Term::new(741.0, 2.171, 1162.475),
    Term::new(677.0, 6.25, 838.969),
    Term::new(567.0, 4.577, 742.99),
    Term::new(485.0, 2.469, 949.176),
    Term::new(469.0, 4.71, 543.918),
    Term::new(445.0, 0.403, 323.505),
    Term::new(416.0, 5.368, 728.763),
    Term::new(402.0, 4.605, 309.278),
    Term::new(347.0, 4.681, 14.227),
    Term::new(338.0, 3.168, 956.289),
    Term::new(261.0, 5.343, 846.083),
    Term::new(247.0, 3.923, 942.062),
    Term::new(220.0, 4.842, 1368.66),
    Term::new(203.0, 5.6, 1155.361),
    Term::new(200.0, 4.439, 1045.155),
    Term::new(197.0, 3.706, 2118.764),
    Term::new(196.0, 3.759, 199.072),
    Term::new(184.0, 4.265, 95.979),
    Term::new(180.0, 4.402, 532.872),
    Term::new(170.0, 4.846, 526.51),
    Term::new(146.0, 6.13, 533.623),
    Term::new(133.0, 1.322, 110.206),
    Term::new(132.0, 4.512, 525.759),
];

#[rustfmt::skip]
const R2: &[Term] = &[
    Term::new(79645.0, 1.35866, 529.69097),
    Term::new(8252.0, 5.7777, 522.5774),
    Term::new(7030.0, 3.2748, 536.8045),
    Term::new(5314.0, 1.8384, 1059.3819),
    Term::new(1861.0, 2.9768, 7.1135),
    Term::new(964.0, 5.48, 515.464),
    Term::new(836.0, 4.199, 419.485),
    Term::new(498.0, 3.142, 0.0),
    Term::new(427.0, 2.228, 639.897),
    Term::new(406.0, 3.783, 1066.495),
    Term::new(377.0, 2.242, 1589.073),
    Term::new(363.0, 5.368, 206.186),
    Term::new(342.0, 6.099, 1052.268),
    Term::new(339.0, 6.127, 625.67),
    Term::new(333.0, 0.003, 426.598),
    Term::new(280.0, 4.262, 412.371),
    Term::new(257.0, 0.963, 632.784),
    Term::new(230.0, 0.705, 735.877),
    Term::new(201.0, 3.069, 543.918),
    Term::new(200.0, 4.429, 103.093),
    Term::new(139.0, 2.932, 14.227),
    Term::new(114.0, 0.787, 728.763),
    Term::new(95.0, 1.7, 838.97),
    Term::new(86.0, 5.14, 323.51),
    Term::new(83.0, 0.06, 309.28),
    Term::new(80.0, 2.98, 742.99),
    Term::new(75.0, 1.6, 956.29),
    Term::new(70.0, 1.51, 213.3),
    Term::new(67.0, 5.47, 199.07),
    Term::new(62.0, 6.1, 1045.15),
    Term::new(56.0, 0.96, 1162.47),
    Term::new(52.0, 5.58, 942.06),
    Term::new(50.0, 2.72, 532.87),
    Term::new(45.0, 5.52, 508.35),
    Term::new(44.0, 0.27, 526.51),
    Term::new(40.0, 5.95, 95.98),
];

#[rustfmt::skip]
const R3: &[Term] = &[
    Term::new(3519.0, 6.058, 529.691),
    Term::new(1073.0, 1.6732, 536.8045),
    Term::new(916.0, 1.413, 522.577),
    Term::new(342.0, 0.523, 1059.382),
    Term::new(255.0, 1.196, 7.114),
    Term::new(222.0, 0.952, 515.464),
    Term::new(90.0, 3.14, 0.0),
    Term::new(69.0, 2.27, 1066.5),
    Term::new(58.0, 1.41, 543.92),
    Term::new(58.0, 0.53, 639.9),
    Term::new(51.0, 5.98, 412.37),
    Term::new(47.0, 1.58, 625.67),
    Term::new(43.0, 6.12, 419.48),
    Term::new(37.0, 1.18, 14.23),
    Term::new(34.0, 1.67, 1052.27),
    Term::new(34.0, 0.85, 206.19),
    Term::new(31.0, 1.04, 1589.07),
    Term::new(30.0, 4.63, 426.6),
    Term::new(21.0, 2.5, 728.76),
    Term::new(15.0, 0.89, 199.07),
    Term::new(14.0, 0.96, 508.35),
    Term::new(13.0, 1.5, 1045.15),
    Term::new(12.0, 2.61, 735.88),
    Term::new(12.0, 3.56, 323.51),
    Term::new(11.0, 1.79, 309.28),
    Term::new(11.0, 6.28, 956.29),
    Term::new(10.0, 6.26, 103.09),
    Term::new(9.0, 3.45, 838.97),
];

#[rustfmt::skip]
const R4: &[Term] = &[
    Term::new(129.0, 0.084, 536.805),
    Term::new(113.0, 4.249, 529.691),
    Term::new(83.0, 3.3, 522.58),
    Term::new(38.0, 2.73, 515.46),
    Term::new(27.0, 5.69, 7.11),
    Term::new(18.0, 5.4, 1059.38),
    Term::new(13.0, 6.02, 543.92),
    Term::new(9.0, 0.77, 1066.5),
    Term::new(8.0, 5.68, 14.23),
    Term::new(7.0, 1.43, 412.37),
    Term::new(6.0, 5.12, 639.9),
    Term::new(5.0, 3.34, 625.67),
    Term::new(3.0, 3.4, 1052.27),
    Term::new(3.0, 4.16, 728.76),
    Term::new(3.0, 2.9, 426.6),
];

#[rustfmt::skip]
const R5: &[Term] = &[
    Term::new(11.0, 4.75, 536.8),
    Term::new(4.0, 5.92, 522.58),
    Term::new(2.0, 5.57, 515.46),
    Term::new(2.0, 4.3, 543.92),
    Term::new(2.0, 3.69, 7.11),
    Term::new(2.0, 4.13, 1059.38),
    Term::new(2.0, 5.49, 1066.5),
    Term::new(1.0, 3.78, 14.23),
    Term::new(1.0, 4.51, 529.69),
];

pub static JUPITER: VsopSeries = VsopSeries {
    name: "Jupiter",
    longitude: [L0, L1, L2, L3, L4, L5],
    latitude: [B0, B1, B2, B3, B4, B5],
    radius: [R0, R1, R2, R3, R4, R5],
};
