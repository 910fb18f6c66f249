//! Pluto: periodic terms in the arguments J, S and P (Jupiter, Saturn and
//! Pluto mean longitudes), valid 1885-2099.
//!
//! Columns: multipliers of J, S, P, then sine/cosine coefficients for
//! longitude and latitude (1e-6 degree) and radius vector (1e-7 AU).

use crate::series::pluto::PlutoTerm;

#[rustfmt::skip]
pub const PLUTO_TERMS: [PlutoTerm; 43] = [
    PlutoTerm::new([0, 0, 1], [-19799805.0, 19850055.0], [-5452852.0, -14974862.0], [66865439.0, 68951812.0]),
    PlutoTerm::new([0, 0, 2], [897144.0, -4954829.0], [3527812.0, 1672790.0], [-11827535.0, -332538.0]),
    PlutoTerm::new([0, 0, 3], [611149.0, 1211027.0], [-1050748.0, 327647.0], [1593179.0, -1438890.0]),
    PlutoTerm::new([0, 0, 4], [-341243.0, -189585.0], [178690.0, -292153.0], [-18444.0, 483220.0]),
    PlutoTerm::new([0, 0, 5], [129287.0, -34992.0], [18650.0, 100340.0], [-65977.0, -85431.0]),
    PlutoTerm::new([0, 0, 6], [-38164.0, 30893.0], [-30697.0, -25823.0], [31174.0, -6032.0]),
    PlutoTerm::new([0, 1, -1], [20442.0, -9987.0], [4878.0, 11248.0], [-5794.0, 22161.0]),
    PlutoTerm::new([0, 1, 0], [-4063.0, -5071.0], [226.0, -64.0], [4601.0, 4032.0]),
    PlutoTerm::new([0, 1, 1], [-6016.0, -3336.0], [2030.0, -836.0], [-1729.0, 234.0]),
    PlutoTerm::new([0, 1, 2], [-3956.0, 3039.0], [69.0, -604.0], [-415.0, 702.0]),
    PlutoTerm::new([0, 1, 3], [-667.0, 3572.0], [-247.0, -567.0], [239.0, 723.0]),
    PlutoTerm::new([0, 2, -2], [1276.0, 501.0], [-57.0, 1.0], [67.0, -67.0]),
    PlutoTerm::new([0, 2, -1], [1152.0, -917.0], [-122.0, 175.0], [1034.0, -451.0]),
    PlutoTerm::new([0, 2, 0], [630.0, -1277.0], [-49.0, -164.0], [-129.0, 504.0]),
    PlutoTerm::new([1, -1, 0], [2571.0, -459.0], [-197.0, 199.0], [480.0, -231.0]),
    PlutoTerm::new([1, -1, 1], [899.0, -1449.0], [-25.0, 217.0], [2.0, -441.0]),
    PlutoTerm::new([1, 0, -3], [-1016.0, 1043.0], [589.0, -248.0], [-3359.0, 265.0]),
    PlutoTerm::new([1, 0, -2], [-2343.0, -1012.0], [-269.0, 711.0], [7856.0, -7832.0]),
    PlutoTerm::new([1, 0, -1], [7042.0, 788.0], [185.0, 193.0], [36.0, 45763.0]),
    PlutoTerm::new([1, 0, 0], [1199.0, -338.0], [315.0, 807.0], [8663.0, 8547.0]),
    PlutoTerm::new([1, 0, 1], [418.0, -67.0], [-130.0, -43.0], [-809.0, -769.0]),
    PlutoTerm::new([1, 0, 2], [120.0, -274.0], [5.0, 3.0], [263.0, -144.0]),
    PlutoTerm::new([1, 0, 3], [-60.0, -159.0], [2.0, 17.0], [-126.0, 32.0]),
    PlutoTerm::new([1, 0, 4], [-82.0, -29.0], [2.0, 5.0], [-35.0, -16.0]),
    PlutoTerm::new([1, 1, -3], [-36.0, -29.0], [2.0, 3.0], [-19.0, -4.0]),
    PlutoTerm::new([1, 1, -2], [-40.0, 7.0], [3.0, 1.0], [-15.0, 8.0]),
    PlutoTerm::new([1, 1, -1], [-14.0, 22.0], [2.0, -1.0], [-4.0, 12.0]),
    PlutoTerm::new([1, 1, 0], [4.0, 13.0], [1.0, -1.0], [5.0, 6.0]),
    PlutoTerm::new([1, 1, 1], [5.0, 2.0], [0.0, -1.0], [3.0, 1.0]),
    PlutoTerm::new([1, 1, 3], [-1.0, 0.0], [0.0, 0.0], [6.0, -2.0]),
    PlutoTerm::new([2, 0, -6], [2.0, 0.0], [0.0, -2.0], [2.0, 2.0]),
    PlutoTerm::new([2, 0, -5], [-4.0, 5.0], [2.0, 2.0], [-2.0, -2.0]),
    PlutoTerm::new([2, 0, -4], [4.0, -7.0], [-7.0, 0.0], [14.0, 13.0]),
    PlutoTerm::new([2, 0, -3], [14.0, 24.0], [10.0, -8.0], [-63.0, 13.0]),
    PlutoTerm::new([2, 0, -2], [-49.0, -34.0], [-3.0, 20.0], [136.0, -236.0]),
    PlutoTerm::new([2, 0, -1], [163.0, -48.0], [6.0, 5.0], [273.0, 1065.0]),
    PlutoTerm::new([2, 0, 0], [9.0, 24.0], [14.0, 17.0], [251.0, 149.0]),
    PlutoTerm::new([2, 0, 1], [-4.0, 1.0], [-2.0, 0.0], [-25.0, -9.0]),
    PlutoTerm::new([2, 0, 2], [-3.0, 1.0], [0.0, 0.0], [9.0, -2.0]),
    PlutoTerm::new([2, 0, 3], [1.0, 3.0], [0.0, 0.0], [-8.0, 7.0]),
    PlutoTerm::new([3, 0, -2], [-3.0, -1.0], [0.0, 1.0], [2.0, -10.0]),
    PlutoTerm::new([3, 0, -1], [5.0, -3.0], [0.0, 0.0], [19.0, 35.0]),
    PlutoTerm::new([3, 0, 0], [0.0, 0.0], [1.0, 0.0], [10.0, 3.0]),
];
