//! Uranus: heliocentric ecliptic-of-date series, truncated VSOP87D.
//!
//! Amplitudes are in units of 1e-8 rad (L, B) or 1e-8 AU (R).

use crate::series::{Term, VsopSeries};

#[rustfmt::skip]
const L0: &[Term] = &[
    Term::new(548129294.0, 0.0, 0.0),
    Term::new(9260408.0, 0.8910642, 74.7815986),
    Term::new(1504248.0, 3.6271926, 1.4844727),
    Term::new(365982.0, 1.899622, 73.297126),
    Term::new(272328.0, 3.358237, 149.563197),
    Term::new(70328.0, 5.39254, 63.7359),
    Term::new(68893.0, 6.09292, 76.26607),
    Term::new(61999.0, 2.26952, 2.96895),
    Term::new(61951.0, 2.85099, 11.0457),
    Term::new(26469.0, 3.14152, 71.81265),
    Term::new(25711.0, 6.1138, 454.90937),
    Term::new(21079.0, 4.36059, 148.07872),
    Term::new(17819.0, 1.74437, 36.64856),
    Term::new(14613.0, 4.73732, 3.93215),
    Term::new(11163.0, 5.82682, 224.3448),
    Term::new(10998.0, 0.48865, 138.5175),
    Term::new(9527.0, 2.9552, 35.1641),
    Term::new(7546.0, 5.2363, 109.9457),
    Term::new(4220.0, 3.2333, 70.8494),
    Term::new(4052.0, 2.2775, 151.0477),
    Term::new(3490.0, 5.4831, 146.5943),
    Term::new(3355.0, 1.0655, 4.4534),
    Term::new(3144.0, 4.752, 77.7505),
    Term::new(2927.0, 4.629, 9.5612),
    Term::new(2922.0, 5.3524, 85.8273),
    Term::new(2273.0, 4.366, 70.3282),
    Term::new(2149.0, 0.6075, 38.133),
    Term::new(2051.0, 1.5177, 0.1119),
    Term::new(1992.0, 4.9244, 277.035),
    Term::new(1667.0, 3.6274, 380.1278),
    Term::new(1533.0, 2.5859, 52.6902),
    Term::new(1376.0, 2.0428, 65.2204),
    Term::new(1372.0, 4.1964, 111.4302),
    Term::new(1284.0, 3.1135, 202.2534),
    Term::new(1282.0, 0.5427, 222.8603),
    Term::new(1244.0, 0.9161, 2.4477),
    Term::new(1221.0, 0.199, 108.4612),
    Term::new(1151.0, 4.179, 33.6796),
    Term::new(1150.0, 0.9334, 3.1814),
    Term::new(1090.0, 1.775, 12.5302),
    Term::new(1072.0, 0.2356, 62.2514),
    Term::new(946.0, 1.192, 127.472),
    Term::new(708.0, 5.183, 213.299),
    Term::new(653.0, 0.966, 78.714),
    Term::new(628.0, 0.182, 984.6),
    Term::new(607.0, 5.432, 529.691),
    Term::new(559.0, 3.358, 0.521),
    Term::new(524.0, 2.013, 299.126),
    Term::new(483.0, 2.106, 0.963),
    Term::new(471.0, 1.407, 184.727),
    Term::new(467.0, 0.415, 145.11),
    Term::new(434.0, 5.521, 183.243),
    Term::new(405.0, 5.987, 8.077),
    Term::new(399.0, 0.338, 415.552),
    Term::new(396.0, 5.87, 351.817),
    Term::new(379.0, 2.35, 56.622),
    Term::new(310.0, 5.833, 145.631),
    Term::new(300.0, 5.644, 22.091),
    Term::new(294.0, 5.839, 39.618),
    Term::new(252.0, 1.637, 221.376),
    Term::new(249.0, 4.746, 225.829),
    Term::new(239.0, 2.35, 137.033),
    Term::new(224.0, 0.516, 84.343),
    Term::new(223.0, 2.843, 0.261),
    Term::new(220.0, 1.922, 67.668),
    Term::new(217.0, 6.142, 5.938),
    Term::new(216.0, 4.778, 340.771),
    Term::new(208.0, 5.58, 68.844),
    Term::new(202.0, 1.297, 0.048),
    Term::new(199.0, 0.956, 152.532),
    Term::new(194.0, 1.888, 456.394),
    Term::new(193.0, 0.916, 453.425),
    Term::new(187.0, 1.319, 0.16),
    Term::new(182.0, 3.536, 79.235),
    Term::new(173.0, 1.539, 160.609),
    Term::new(172.0, 5.68, 219.891),
    Term::new(170.0, 3.677, 5.417),
    Term::new(169.0, 5.879, 18.159),
    Term::new(165.0, 1.424, 106.977),
    Term::new(163.0, 3.05, 112.915),
    Term::new(158.0, 0.738, 54.175),
    Term::new(147.0, 1.263, 59.804),
    Term::new(143.0, 1.3, 35.425),
    Term::new(139.0, 5.386, 32.195),
    Term::new(139.0, 4.26, 909.819),
    Term::new(124.0, 1.374, 7.114),
    Term::new(110.0, 2.027, 554.07),
    Term::new(109.0, 5.706, 77.963),
    Term::new(104.0, 5.028, 0.751),
    Term::new(104.0, 1.458, 24.379),
    Term::new(103.0, 0.681, 14.978),
];

#[rustfmt::skip]
const L1: &[Term] = &[
    Term::new(7502543122.0, 0.0, 0.0),
    Term::new(154458.0, 5.242017, 74.781599),
    Term::new(24456.0, 1.71256, 1.48447),
    Term::new(9258.0, 0.4284, 11.0457),
    Term::new(8266.0, 1.5022, 63.7359),
    Term::new(7842.0, 1.3198, 149.5632),
    Term::new(3899.0, 0.4648, 3.9322),
    Term::new(2284.0, 4.1737, 76.2661),
    Term::new(1927.0, 0.5301, 2.9689),
    Term::new(1233.0, 1.5863, 70.8494),
    Term::new(791.0, 5.436, 3.181),
    Term::new(767.0, 1.996, 73.297),
    Term::new(482.0, 2.984, 85.827),
    Term::new(450.0, 4.138, 138.517),
    Term::new(446.0, 3.723, 224.345),
    Term::new(427.0, 4.731, 71.813),
    Term::new(354.0, 2.583, 148.079),
    Term::new(348.0, 2.454, 9.561),
    Term::new(317.0, 5.579, 52.69),
    Term::new(206.0, 2.363, 2.448),
    Term::new(189.0, 4.202, 56.622),
    Term::new(184.0, 0.284, 151.048),
    Term::new(180.0, 5.684, 12.53),
    Term::new(171.0, 3.001, 78.714),
    Term::new(158.0, 2.909, 0.963),
    Term::new(155.0, 5.591, 4.453),
    Term::new(154.0, 4.652, 35.164),
    Term::new(152.0, 2.942, 77.751),
    Term::new(143.0, 2.59, 62.251),
    Term::new(121.0, 4.148, 127.472),
    Term::new(116.0, 3.732, 65.22),
    Term::new(102.0, 4.188, 145.631),
    Term::new(102.0, 6.034, 0.112),
    Term::new(88.0, 3.99, 18.16),
    Term::new(88.0, 6.16, 202.25),
    Term::new(81.0, 2.64, 22.09),
    Term::new(72.0, 6.05, 70.33),
    Term::new(69.0, 4.05, 77.96),
    Term::new(59.0, 3.7, 67.67),
    Term::new(47.0, 3.54, 351.82),
    Term::new(44.0, 5.91, 7.11),
    Term::new(43.0, 5.72, 5.42),
    Term::new(39.0, 4.92, 222.86),
    Term::new(36.0, 5.9, 33.68),
    Term::new(36.0, 3.29, 8.08),
    Term::new(36.0, 3.33, 71.6),
    Term::new(35.0, 5.08, 38.13),
    Term::new(31.0, 5.62, 984.6),
    Term::new(31.0, 5.5, 59.8),
    Term::new(31.0, 5.46, 160.61),
    Term::new(30.0, 1.66, 447.8),
    Term::new(29.0, 1.15, 462.02),
    Term::new(29.0, 4.52, 84.34),
    Term::new(27.0, 5.54, 131.4),
    Term::new(27.0, 6.15, 299.13),
    Term::new(26.0, 4.99, 137.03),
    Term::new(25.0, 5.74, 380.13),
];

#[rustfmt::skip]
const L2: &[Term] = &[
    Term::new(53033.0, 0.0, 0.0),
    Term::new(2358.0, 2.2601, 74.7816),
    Term::new(769.0, 4.526, 11.046),
    Term::new(552.0, 3.258, 63.736),
    Term::new(542.0, 2.276, 3.932),
    Term::new(529.0, 4.923, 1.484),
    Term::new(258.0, 3.691, 3.181),
    Term::new(239.0, 5.858, 149.563),
    Term::new(182.0, 6.218, 70.849),
    Term::new(54.0, 1.44, 76.27),
    Term::new(49.0, 6.03, 56.62),
    Term::new(45.0, 3.91, 2.45),
    Term::new(45.0, 0.81, 85.83),
    Term::new(38.0, 1.78, 52.69),
    Term::new(37.0, 4.46, 2.97),
    Term::new(33.0, 0.86, 9.56),
    Term::new(29.0, 5.1, 73.3),
    Term::new(24.0, 2.11, 18.16),
    Term::new(22.0, 5.99, 138.52),
    Term::new(22.0, 4.82, 78.71),
    Term::new(21.0, 2.4, 77.96),
    Term::new(21.0, 2.17, 224.34),
    Term::new(17.0, 2.54, 145.63),
    Term::new(17.0, 3.47, 12.53),
    Term::new(12.0, 0.02, 22.09),
    Term::new(11.0, 0.08, 127.47),
    Term::new(10.0, 5.16, 71.6),
    Term::new(10.0, 4.46, 62.25),
    Term::new(9.0, 4.26, 7.11),
    Term::new(8.0, 5.5, 67.67),
    Term::new(7.0, 1.25, 5.42),
    Term::new(6.0, 3.36, 447.8),
    Term::new(6.0, 5.45, 65.22),
    Term::new(6.0, 4.52, 151.05),
    Term::new(6.0, 5.73, 462.02),
];

#[rustfmt::skip]
const L3: &[Term] = &[
    Term::new(121.0, 0.024, 74.782),
    Term::new(68.0, 4.12, 3.93),
    Term::new(53.0, 2.39, 11.05),
    Term::new(46.0, 0.0, 0.0),
    Term::new(45.0, 2.04, 3.18),
    Term::new(44.0, 2.96, 1.48),
    Term::new(25.0, 4.89, 63.74),
    Term::new(21.0, 4.55, 70.85),
    Term::new(20.0, 2.31, 149.56),
    Term::new(9.0, 1.58, 56.62),
    Term::new(4.0, 0.23, 18.16),
    Term::new(4.0, 5.39, 76.27),
    Term::new(4.0, 0.95, 77.96),
    Term::new(3.0, 4.98, 85.83),
    Term::new(3.0, 4.13, 52.69),
    Term::new(3.0, 0.37, 78.71),
    Term::new(2.0, 0.86, 145.63),
    Term::new(2.0, 5.66, 9.56),
];

#[rustfmt::skip]
const L4: &[Term] = &[
    Term::new(114.0, 3.142, 0.0),
    Term::new(6.0, 4.58, 74.78),
    Term::new(3.0, 0.35, 11.05),
    Term::new(1.0, 3.42, 56.62),
];

#[rustfmt::skip]
const B0: &[Term] = &[
    Term::new(1346278.0, 2.6187781, 74.7815986),
    Term::new(62341.0, 5.08111, 149.5632),
    Term::new(61601.0, 3.14159, 0.0),
    Term::new(9964.0, 1.616, 76.2661),
    Term::new(9926.0, 0.5763, 73.2971),
    Term::new(3259.0, 1.2612, 224.3448),
    Term::new(2972.0, 2.2437, 1.4845),
    Term::new(2010.0, 6.0555, 148.0787),
    Term::new(1522.0, 0.2796, 63.7359),
    Term::new(924.0, 4.038, 151.048),
    Term::new(761.0, 6.14, 71.813),
    Term::new(522.0, 3.321, 138.517),
    Term::new(463.0, 0.743, 85.827),
    Term::new(437.0, 3.381, 529.691),
    Term::new(435.0, 0.341, 77.751),
    Term::new(431.0, 3.554, 213.299),
    Term::new(420.0, 5.213, 11.046),
    Term::new(245.0, 0.788, 2.969),
    Term::new(233.0, 2.257, 222.86),
    Term::new(216.0, 1.591, 38.133),
    Term::new(180.0, 3.725, 299.126),
    Term::new(175.0, 1.236, 146.594),
    Term::new(174.0, 1.937, 380.128),
    Term::new(160.0, 5.336, 111.43),
    Term::new(144.0, 5.962, 35.164),
    Term::new(116.0, 5.739, 70.849),
    Term::new(106.0, 0.941, 70.328),
    Term::new(102.0, 2.619, 78.714),
];

#[rustfmt::skip]
const B1: &[Term] = &[
    Term::new(206366.0, 4.123943, 74.781599),
    Term::new(8563.0, 0.3382, 149.5632),
    Term::new(1726.0, 2.1219, 73.2971),
    Term::new(1374.0, 0.0, 0.0),
    Term::new(1369.0, 3.0686, 76.2661),
    Term::new(451.0, 3.777, 1.484),
    Term::new(400.0, 2.848, 224.345),
    Term::new(307.0, 1.255, 148.079),
    Term::new(154.0, 3.786, 63.736),
    Term::new(112.0, 5.573, 151.048),
    Term::new(111.0, 5.329, 138.517),
    Term::new(83.0, 3.59, 71.81),
    Term::new(56.0, 3.4, 85.83),
    Term::new(54.0, 1.7, 77.75),
    Term::new(42.0, 1.21, 11.05),
    Term::new(41.0, 4.45, 78.71),
    Term::new(32.0, 3.77, 222.86),
    Term::new(30.0, 2.56, 2.97),
    Term::new(27.0, 5.34, 213.3),
    Term::new(26.0, 0.42, 380.13),
];

#[rustfmt::skip]
const B2: &[Term] = &[
    Term::new(9212.0, 5.8004, 74.7816),
    Term::new(557.0, 0.0, 0.0),
    Term::new(286.0, 2.177, 149.563),
    Term::new(95.0, 3.84, 73.3),
    Term::new(45.0, 4.88, 76.27),
    Term::new(20.0, 5.46, 1.48),
    Term::new(15.0, 0.88, 138.52),
    Term::new(14.0, 2.85, 148.08),
    Term::new(14.0, 5.07, 63.74),
    Term::new(10.0, 5.0, 224.34),
    Term::new(8.0, 6.27, 78.71),
];

#[rustfmt::skip]
const B3: &[Term] = &[
    Term::new(268.0, 1.251, 74.782),
    Term::new(11.0, 3.14, 0.0),
    Term::new(6.0, 4.01, 149.56),
    Term::new(3.0, 5.78, 73.3),
];

#[rustfmt::skip]
const B4: &[Term] = &[
    Term::new(6.0, 2.85, 74.78),
];

#[rustfmt::skip]
const R0: &[Term] = &[
    Term::new(1921264848.0, 0.0, 0.0),
    Term::new(88784984.0, 5.60377527, 74.78159857),
    Term::new(3440836.0, 0.328361, 73.2971259),
    Term::new(2055653.0, 1.7829517, 149.5631971),
    Term::new(649322.0, 4.522473, 76.266071),
    Term::new(602248.0, 3.860038, 63.735898),
    Term::new(496404.0, 1.401399, 454.909367),
    Term::new(338526.0, 1.580027, 138.517497),
    Term::new(243508.0, 1.570866, 71.812653),
    Term::new(190522.0, 1.998094, 1.484473),
    Term::new(161858.0, 2.791379, 148.078724),
    Term::new(143706.0, 1.383686, 11.0457),
    Term::new(93192.0, 0.17437, 36.64856),
    Term::new(89806.0, 3.66105, 109.94569),
    Term::new(71424.0, 4.24509, 224.3448),
    Term::new(46677.0, 1.39977, 35.16409),
    Term::new(39026.0, 3.36235, 277.03499),
    Term::new(39010.0, 1.66971, 70.84945),
    Term::new(36755.0, 3.88649, 146.59425),
    Term::new(30349.0, 0.701, 151.04767),
    Term::new(29156.0, 3.18056, 77.75054),
    Term::new(25786.0, 3.78538, 85.8273),
    Term::new(25620.0, 5.25656, 380.12777),
    Term::new(22637.0, 0.72519, 529.69097),
    Term::new(20473.0, 2.7964, 70.32818),
    Term::new(20472.0, 1.55589, 202.2534),
    Term::new(17901.0, 0.55455, 2.96895),
    Term::new(15503.0, 5.35405, 38.13304),
    Term::new(14702.0, 4.90434, 108.46122),
    Term::new(12897.0, 2.62154, 111.43016),
    Term::new(12328.0, 5.96039, 127.4718),
    Term::new(11959.0, 1.75044, 984.60033),
    Term::new(11853.0, 0.99343, 52.6902),
    Term::new(11696.0, 3.29826, 3.93215),
    Term::new(11495.0, 0.43774, 65.22037),
    Term::new(10793.0, 1.42105, 213.2991),
    Term::new(9111.0, 4.9964, 62.2514),
    Term::new(8421.0, 5.2535, 222.8603),
    Term::new(8402.0, 5.0388, 415.5525),
    Term::new(7449.0, 0.7949, 351.8166),
    Term::new(7329.0, 3.9728, 183.2428),
    Term::new(6046.0, 5.6796, 78.7138),
    Term::new(5524.0, 3.115, 9.5612),
    Term::new(5445.0, 5.1058, 145.1098),
    Term::new(5238.0, 2.6296, 33.6796),
    Term::new(4079.0, 3.2206, 340.7709),
    Term::new(3919.0, 4.2502, 39.6175),
    Term::new(3802.0, 6.1099, 184.7273),
    Term::new(3781.0, 3.4584, 456.3938),
    Term::new(3687.0, 2.4872, 453.4249),
    Term::new(3102.0, 4.1403, 219.8914),
    Term::new(2963.0, 0.8298, 56.6224),
    Term::new(2942.0, 0.4239, 299.1264),
    Term::new(2940.0, 2.1464, 137.033),
    Term::new(2938.0, 3.6766, 140.002),
    Term::new(2865.0, 0.31, 12.5302),
    Term::new(2538.0, 4.8546, 131.4039),
    Term::new(2364.0, 0.4425, 554.07),
    Term::new(2183.0, 2.9404, 305.3462),
];

#[rustfmt::skip]
const R1: &[Term] = &[
    Term::new(1479896.0, 3.6720571, 74.7815986),
    Term::new(71212.0, 6.22601, 63.7359),
    Term::new(68627.0, 6.13411, 149.5632),
    Term::new(24060.0, 3.14159, 0.0),
    Term::new(21468.0, 2.60177, 76.26607),
    Term::new(20857.0, 5.24625, 11.0457),
    Term::new(11405.0, 0.01848, 70.84945),
    Term::new(7497.0, 0.4236, 73.2971),
    Term::new(4244.0, 1.4169, 85.8273),
    Term::new(3927.0, 3.1551, 71.8127),
    Term::new(3578.0, 2.3116, 224.3448),
    Term::new(3506.0, 2.5835, 138.5175),
    Term::new(3229.0, 5.255, 3.9322),
    Term::new(3060.0, 0.1532, 1.4845),
    Term::new(2564.0, 0.9808, 148.0787),
    Term::new(2429.0, 3.9944, 52.6902),
    Term::new(1645.0, 2.6535, 127.4718),
    Term::new(1584.0, 1.4305, 78.7138),
    Term::new(1508.0, 5.06, 151.0477),
    Term::new(1490.0, 2.6756, 56.6224),
    Term::new(1413.0, 4.5746, 202.2534),
    Term::new(1403.0, 1.3699, 77.7505),
    Term::new(1228.0, 1.047, 62.2514),
    Term::new(1033.0, 0.2646, 131.4039),
    Term::new(992.0, 2.172, 65.22),
    Term::new(862.0, 5.055, 351.817),
    Term::new(744.0, 3.076, 35.164),
    Term::new(687.0, 2.499, 77.963),
    Term::new(647.0, 4.473, 70.328),
    Term::new(624.0, 0.863, 9.561),
    Term::new(604.0, 0.907, 984.6),
    Term::new(575.0, 3.231, 447.796),
    Term::new(562.0, 2.718, 462.023),
    Term::new(530.0, 5.917, 213.299),
    Term::new(528.0, 5.151, 2.969),
];

#[rustfmt::skip]
const R2: &[Term] = &[
    Term::new(22440.0, 0.69953, 74.7816),
    Term::new(4727.0, 1.699, 63.7359),
    Term::new(1682.0, 4.6483, 70.8494),
    Term::new(1650.0, 3.0966, 11.0457),
    Term::new(1434.0, 3.5212, 149.5632),
    Term::new(770.0, 0.0, 0.0),
    Term::new(500.0, 6.172, 76.266),
    Term::new(461.0, 0.767, 3.932),
    Term::new(390.0, 4.496, 56.622),
    Term::new(390.0, 5.527, 85.827),
    Term::new(292.0, 0.204, 52.69),
    Term::new(287.0, 3.534, 73.297),
    Term::new(273.0, 3.847, 138.517),
    Term::new(220.0, 1.964, 131.404),
    Term::new(216.0, 0.848, 77.963),
    Term::new(205.0, 3.248, 78.714),
    Term::new(149.0, 4.898, 127.472),
    Term::new(129.0, 2.081, 3.181),
];

#[rustfmt::skip]
const R3: &[Term] = &[
    Term::new(1164.0, 4.7345, 74.7816),
    Term::new(212.0, 3.343, 63.736),
    Term::new(196.0, 2.98, 70.849),
    Term::new(105.0, 0.958, 11.046),
    Term::new(73.0, 1.0, 149.56),
    Term::new(72.0, 0.03, 56.62),
    Term::new(55.0, 2.59, 3.93),
    Term::new(36.0, 5.65, 77.96),
    Term::new(34.0, 3.82, 76.27),
    Term::new(32.0, 3.6, 131.4),
];

#[rustfmt::skip]
const R4: &[Term] = &[
    Term::new(53.0, 3.01, 74.78),
    Term::new(10.0, 1.91, 56.62),
];

pub static URANUS: VsopSeries = VsopSeries {
    name: "Uranus",
    longitude: [L0, L1, L2, L3, L4, &[]],
    latitude: [B0, B1, B2, B3, B4, &[]],
    radius: [R0, R1, R2, R3, R4, &[]],
};
