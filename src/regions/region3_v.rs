//! Backward `v(T,p)` equations for region 3, IAPWS SR5-05(2016).
//!
//! The (T,p) plane inside region 3 is partitioned into 26 sub-regions
//! 3a…3t plus the near-critical auxiliary set 3u…3z. Each sub-region has its
//! own polynomial with private reducing constants and shift/exponent
//! parameters; sub-region 3n is the one exponential form. Dispatch is a
//! decision tree over pressure bands, then a comparison of T against one or
//! two of the auxiliary `T_3xy(p)` curves.
//!
//! The values here are specified to ~1e-6 relative; with the
//! `region3-iterate` feature they only seed the Newton refinement in
//! [`super::region3`].

use crate::units::P_CRIT;

use super::region4;

/// One SR5-05 sub-region equation:
/// `v = v* · [Σ n ((π−a)^c)^I ((θ−b)^d)^J]^e`, θ = T/T*, π = p/p*.
struct Subregion {
    v_star: f64,
    p_star: f64,
    t_star: f64,
    a: f64,
    b: f64,
    c: f64,
    d: f64,
    e: f64,
    /// The 3n equation exponentiates the sum instead of raising it.
    exponential: bool,
    i: &'static [i32],
    j: &'static [i32],
    n: &'static [f64],
}

impl Subregion {
    fn v(&self, t: f64, p: f64) -> f64 {
        let x = p / self.p_star - self.a;
        let y = t / self.t_star - self.b;
        let mut sum = 0.0;
        for k in 0..self.n.len() {
            sum += self.n[k]
                * x.powf(self.c * f64::from(self.i[k]))
                * y.powf(self.d * f64::from(self.j[k]));
        }
        if self.exponential {
            self.v_star * sum.exp()
        } else {
            self.v_star * sum.powf(self.e)
        }
    }
}

macro_rules! subregion {
    ($name:ident, $v:expr, $p:expr, $t:expr, $a:expr, $b:expr, $c:expr, $d:expr, $e:expr,
     i: [$($i:expr),* $(,)?], j: [$($j:expr),* $(,)?], n: [$($n:expr),* $(,)?]) => {
        const $name: Subregion = Subregion {
            v_star: $v,
            p_star: $p,
            t_star: $t,
            a: $a,
            b: $b,
            c: $c,
            d: $d,
            e: $e,
            exponential: false,
            i: &[$($i),*],
            j: &[$($j),*],
            n: &[$($n),*],
        };
    };
}

subregion!(SUB_3A, 0.0024, 100.0, 760.0, 0.085, 0.817, 1.0, 1.0, 1.0,
    i: [-12, -12, -12, -10, -10, -10, -8, -8, -8, -6, -5, -5, -5, -4, -3,
        -3, -3, -3, -2, -2, -2, -1, -1, -1, 0, 0, 1, 1, 1, 2],
    j: [5, 10, 12, 5, 10, 12, 5, 8, 10, 1, 1, 5, 10, 8, 0, 1, 3, 6, 0, 2,
        3, 0, 1, 2, 0, 1, 0, 1, 2, 0],
    n: [
         0.110_879_558_823_853e-2,
         0.572_616_740_810_616e3,
        -0.767_051_948_380_852e5,
        -0.253_321_069_529_674e-1,
         0.628_008_049_345_689e4,
         0.234_105_654_131_876e6,
         0.216_867_826_045_856,
        -0.156_237_904_341_963e3,
        -0.269_893_956_176_613e5,
        -0.180_407_100_085_505e-3,
         0.116_732_227_668_261e-2,
         0.266_987_040_856_040e2,
         0.282_776_617_243_286e5,
        -0.242_431_520_029_523e4,
         0.435_217_323_022_733e-3,
        -0.122_494_831_387_441e-1,
         0.179_357_604_019_989e1,
         0.442_729_521_058_314e2,
        -0.593_223_489_018_342e-2,
         0.453_186_261_685_774,
         0.135_825_703_129_140e1,
         0.408_748_415_856_745e-1,
         0.474_686_397_863_312,
         0.118_646_814_997_915e1,
         0.546_987_265_727_549,
         0.195_266_770_452_643,
        -0.502_268_790_869_663e-1,
        -0.369_645_308_193_377,
         0.633_828_037_528_420e-2,
         0.797_441_793_901_017e-1,
    ]);

subregion!(SUB_3B, 0.0041, 100.0, 860.0, 0.280, 0.779, 1.0, 1.0, 1.0,
    i: [-12, -12, -10, -10, -8, -6, -6, -6, -5, -5, -5, -4, -4, -4, -3, -3,
        -3, -3, -3, -2, -2, -2, -1, -1, 0, 0, 1, 1, 2, 3, 4, 4],
    j: [10, 12, 8, 14, 8, 5, 6, 8, 5, 8, 10, 2, 4, 5, 0, 1, 2, 3, 5, 0, 2,
        5, 0, 2, 0, 1, 0, 2, 0, 2, 0, 1],
    n: [
        -0.827_670_470_003_621e-1,
         0.416_887_126_010_565e2,
         0.483_651_982_197_059e-1,
        -0.291_032_084_950_276e5,
        -0.111_422_582_236_948e3,
        -0.202_300_083_904_014e-1,
         0.294_002_509_338_515e3,
         0.140_244_997_609_658e3,
        -0.344_384_158_811_459e3,
         0.361_182_452_612_149e3,
        -0.140_699_677_420_738e4,
        -0.202_023_902_676_481e-2,
         0.171_346_792_457_471e3,
        -0.425_597_804_058_632e1,
         0.691_346_085_000_334e-5,
         0.151_140_509_678_925e-2,
        -0.416_375_290_166_236e-1,
        -0.413_754_957_011_042e2,
        -0.506_673_295_721_637e2,
        -0.572_212_965_569_023e-3,
         0.608_817_368_401_785e1,
         0.239_600_660_256_161e2,
         0.122_261_479_925_384e-1,
         0.216_356_057_692_938e1,
         0.398_198_903_368_642,
        -0.116_892_827_834_085,
        -0.102_845_919_373_532,
        -0.492_676_637_589_284,
         0.655_540_456_406_790e-1,
        -0.240_462_535_078_530,
        -0.269_798_180_310_075e-1,
         0.128_369_435_967_012,
    ]);

subregion!(SUB_3C, 0.0022, 40.0, 690.0, 0.259, 0.903, 1.0, 1.0, 1.0,
    i: [-12, -12, -12, -10, -10, -10, -8, -8, -8, -6, -5, -5, -5, -4, -4,
        -3, -3, -2, -2, -2, -1, -1, -1, 0, 0, 0, 1, 1, 2, 2, 2, 2, 3, 3, 8],
    j: [6, 8, 10, 6, 8, 10, 5, 6, 7, 8, 1, 4, 7, 2, 8, 0, 3, 0, 4, 5, 0, 1,
        2, 0, 1, 2, 0, 2, 0, 1, 3, 7, 0, 7, 1],
    n: [
         0.311_967_788_763_030e1,
         0.276_713_458_847_564e5,
         0.322_583_103_403_269e8,
        -0.342_416_065_095_363e3,
        -0.899_732_529_907_377e6,
        -0.793_892_049_821_251e8,
         0.953_193_003_217_388e2,
         0.229_784_742_345_072e4,
         0.175_336_675_322_499e6,
         0.791_214_365_222_792e7,
         0.319_933_345_844_209e-4,
        -0.659_508_863_555_767e2,
        -0.833_426_563_212_851e6,
         0.645_734_680_583_292e-1,
        -0.382_031_020_570_813e7,
         0.406_398_848_470_079e-4,
         0.310_327_498_492_008e2,
        -0.892_996_718_483_724e-3,
         0.234_604_891_591_616e3,
         0.377_515_668_966_951e4,
         0.158_646_812_591_361e-1,
         0.707_906_336_241_843,
         0.126_016_225_146_570e2,
         0.736_143_655_772_152,
         0.676_544_268_999_101,
        -0.178_100_588_189_137e2,
        -0.156_531_975_531_713,
         0.117_707_430_048_158e2,
         0.840_143_653_860_447e-1,
        -0.186_442_467_471_949,
        -0.440_170_203_949_645e2,
         0.123_290_423_502_494e7,
        -0.240_650_039_730_845e-1,
        -0.107_077_716_660_869e7,
         0.438_319_858_566_475e-1,
    ]);

subregion!(SUB_3D, 0.0029, 40.0, 690.0, 0.559, 0.939, 1.0, 1.0, 4.0,
    i: [-12, -12, -12, -12, -12, -12, -10, -10, -10, -10, -10, -10, -10,
        -8, -8, -8, -8, -6, -6, -5, -5, -5, -5, -4, -4, -4, -3, -3, -2, -2,
        -1, -1, -1, 0, 0, 1, 1, 3],
    j: [4, 6, 7, 10, 12, 16, 0, 2, 4, 6, 8, 10, 14, 3, 7, 8, 10, 6, 8, 1,
        2, 5, 7, 0, 1, 7, 2, 4, 0, 1, 0, 1, 5, 0, 2, 0, 6, 0],
    n: [
        -0.452_484_847_171_645e-9,
         0.315_210_389_538_801e-4,
        -0.214_991_352_047_545e-2,
         0.508_058_874_808_345e3,
        -0.127_123_036_845_932e8,
         0.115_371_133_120_497e13,
        -0.197_805_728_776_273e-15,
         0.241_554_806_033_972e-10,
        -0.156_481_703_640_525e-5,
         0.277_211_346_836_625e-2,
        -0.203_578_994_462_286e2,
         0.144_369_489_909_053e7,
        -0.411_254_217_946_539e11,
         0.623_449_786_243_773e-5,
        -0.221_774_281_146_038e2,
        -0.689_315_087_933_158e5,
        -0.195_419_525_060_713e8,
         0.316_373_510_564_015e4,
         0.224_040_754_426_988e7,
        -0.436_701_347_922_356e-5,
        -0.404_213_852_833_996e-3,
        -0.348_153_203_414_663e3,
        -0.385_294_213_555_289e6,
         0.135_203_700_099_403e-6,
         0.134_648_383_271_089e-3,
         0.125_031_835_351_736e6,
         0.968_123_678_455_841e-1,
         0.225_660_517_512_438e3,
        -0.190_102_435_341_872e-3,
        -0.299_628_410_819_229e-1,
         0.500_833_915_372_121e-2,
         0.387_842_482_998_411,
        -0.138_535_367_777_182e4,
         0.870_745_245_971_773,
         0.171_946_252_068_742e1,
        -0.326_650_121_426_383e-1,
         0.498_044_171_727_877e4,
         0.551_478_022_765_087e-2,
    ]);

subregion!(SUB_3E, 0.0032, 40.0, 710.0, 0.587, 0.918, 1.0, 1.0, 1.0,
    i: [-12, -12, -10, -10, -10, -10, -10, -8, -8, -8, -6, -5, -4, -4, -3,
        -3, -3, -2, -2, -2, -2, -1, 0, 0, 1, 1, 1, 2, 2],
    j: [14, 16, 3, 6, 10, 14, 16, 7, 8, 10, 6, 6, 2, 4, 2, 6, 7, 0, 1, 3,
        4, 0, 0, 1, 0, 4, 6, 0, 2],
    n: [
         0.715_815_808_404_721e9,
        -0.114_328_360_753_449e12,
         0.376_531_002_015_720e-11,
        -0.903_983_668_691_157e-4,
         0.665_695_908_836_252e6,
         0.535_364_174_960_127e10,
         0.794_977_402_335_603e11,
         0.922_230_563_421_437e2,
        -0.142_586_073_991_215e6,
        -0.111_796_381_424_162e7,
         0.896_121_629_640_760e4,
        -0.669_989_239_070_491e4,
         0.451_242_538_486_834e-2,
        -0.339_731_325_977_713e2,
        -0.120_523_111_552_278e1,
         0.475_992_667_717_124e5,
        -0.266_627_750_390_341e6,
        -0.153_314_954_386_524e-3,
         0.305_638_404_828_265,
         0.123_654_999_499_486e3,
        -0.104_390_794_213_011e4,
        -0.157_496_516_174_308e-1,
         0.685_331_118_940_253,
         0.178_373_462_873_903e1,
        -0.544_674_124_878_910,
         0.204_529_931_318_843e4,
        -0.228_342_359_328_752e5,
         0.413_197_481_515_899,
        -0.341_931_835_910_405e2,
    ]);

subregion!(SUB_3F, 0.0064, 40.0, 730.0, 0.587, 0.891, 0.5, 1.0, 4.0,
    i: [0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 2, 2, 3, 3, 3, 4, 5, 5, 6, 7, 7, 10,
        12, 12, 12, 14, 14, 14, 14, 14, 16, 16, 18, 18, 20, 20, 20, 22, 24,
        24, 28, 32],
    j: [-3, -2, -1, 0, 1, 2, -1, 1, 2, 3, 0, 1, -5, -2, 0, -3, -8, 1, -6,
        -4, 1, -6, -10, -8, -4, -12, -10, -8, -6, -4, -10, -8, -12, -10,
        -12, -10, -6, -12, -12, -4, -12, -12],
    n: [
        -0.251_756_547_792_325e-7,
         0.601_307_193_668_763e-5,
        -0.100_615_977_450_049e-2,
         0.999_969_140_252_192,
         0.214_107_759_236_486e1,
        -0.165_175_571_959_086e2,
        -0.141_987_303_638_727e-2,
         0.269_251_915_156_554e1,
         0.349_741_815_858_722e2,
        -0.300_208_695_771_783e2,
        -0.131_546_288_252_539e1,
        -0.839_091_277_286_169e1,
         0.181_545_608_337_015e-9,
        -0.591_099_206_478_909e-3,
         0.152_115_067_087_106e1,
         0.252_956_470_663_225e-4,
         0.100_726_265_203_786e-14,
        -0.149_774_533_860_650e1,
        -0.793_940_970_562_969e-9,
        -0.150_290_891_264_717e-3,
         0.151_205_531_275_133e1,
         0.470_942_606_221_652e-5,
         0.195_049_710_391_712e-12,
        -0.911_627_886_266_077e-8,
         0.604_374_640_201_265e-3,
        -0.225_132_933_900_136e-15,
         0.610_916_973_582_981e-11,
        -0.303_063_908_043_404e-6,
        -0.137_796_070_798_409e-4,
        -0.919_296_736_666_106e-3,
         0.639_288_223_132_545e-9,
         0.753_259_479_898_699e-6,
        -0.400_321_478_682_929e-12,
         0.756_140_294_351_614e-8,
        -0.912_082_054_034_891e-11,
        -0.237_612_381_140_539e-7,
         0.269_586_010_591_874e-4,
        -0.732_828_135_157_839e-10,
         0.241_995_578_306_660e-9,
        -0.405_735_532_730_322e-3,
         0.189_424_143_498_011e-9,
        -0.486_632_965_074_563e-9,
    ]);

subregion!(SUB_3G, 0.0027, 25.0, 660.0, 0.872, 0.971, 1.0, 1.0, 4.0,
    i: [-12, -12, -12, -12, -12, -12, -10, -10, -10, -8, -8, -8, -8, -6,
        -6, -5, -5, -4, -3, -2, -2, -2, -2, -1, -1, -1, 0, 0, 0, 1, 1, 1,
        3, 5, 6, 8, 10, 10],
    j: [7, 12, 14, 18, 22, 24, 14, 20, 24, 7, 8, 10, 12, 8, 22, 7, 20, 22,
        7, 3, 5, 14, 24, 2, 8, 18, 0, 1, 2, 0, 1, 3, 24, 22, 12, 3, 0, 6],
    n: [
         0.412_209_020_652_996e-4,
        -0.114_987_238_280_587e7,
         0.948_180_885_032_080e10,
        -0.195_788_865_718_971e18,
         0.496_250_704_871_300e25,
        -0.105_549_884_548_496e29,
        -0.758_642_165_988_278e12,
        -0.922_172_769_596_101e23,
         0.725_379_072_059_348e30,
        -0.617_718_249_205_859e2,
         0.107_555_033_344_858e5,
        -0.379_545_802_336_487e8,
         0.228_646_846_221_831e12,
        -0.499_741_093_010_619e7,
        -0.280_214_310_054_101e31,
         0.104_915_406_769_586e7,
         0.613_754_229_168_619e28,
         0.802_056_715_528_378e32,
        -0.298_617_819_828_065e8,
        -0.910_782_540_134_681e2,
         0.135_033_227_281_565e6,
        -0.712_949_383_408_211e19,
        -0.104_578_785_289_542e37,
         0.304_331_584_444_093e2,
         0.593_250_797_959_445e10,
        -0.364_174_062_110_798e28,
         0.921_791_403_532_461,
        -0.337_693_609_657_471,
        -0.724_644_143_758_508e2,
        -0.110_480_239_272_601,
         0.536_516_031_875_059e1,
        -0.291_441_872_156_205e4,
         0.616_338_176_535_305e40,
        -0.120_889_175_861_180e39,
         0.818_396_024_524_612e23,
         0.940_781_944_835_829e9,
        -0.367_279_669_545_448e5,
        -0.837_513_931_798_655e16,
    ]);

subregion!(SUB_3H, 0.0032, 25.0, 660.0, 0.898, 0.983, 1.0, 1.0, 4.0,
    i: [-12, -12, -10, -10, -10, -10, -10, -10, -8, -8, -8, -8, -8, -6, -6,
        -6, -5, -5, -5, -4, -4, -3, -3, -2, -1, -1, 0, 1, 1],
    j: [8, 12, 4, 6, 8, 10, 14, 16, 0, 1, 6, 7, 8, 4, 6, 8, 2, 3, 4, 2, 4,
        1, 2, 0, 0, 2, 0, 0, 2],
    n: [
         0.561_379_678_887_577e-1,
         0.774_135_421_587_083e10,
         0.111_482_975_877_938e-8,
        -0.143_987_128_208_183e-2,
         0.193_696_558_764_920e4,
        -0.605_971_823_585_005e9,
         0.171_951_568_124_337e14,
        -0.185_461_154_985_145e17,
         0.387_851_168_078_010e-16,
        -0.395_464_327_846_105e-13,
        -0.170_875_935_679_023e3,
        -0.212_010_620_701_220e4,
         0.177_683_337_348_191e8,
         0.110_177_443_629_575e2,
        -0.234_396_091_693_313e6,
        -0.656_174_421_999_594e7,
         0.156_362_212_977_396e-4,
        -0.212_946_257_021_400e1,
         0.135_249_306_374_858e2,
         0.177_189_164_145_813,
         0.139_499_167_345_464e4,
        -0.703_670_932_036_388e-2,
        -0.152_011_044_389_648,
         0.981_916_922_991_113e-4,
         0.147_199_658_618_076e-2,
         0.202_618_487_025_578e2,
         0.899_345_518_944_240,
        -0.211_346_402_240_858,
         0.249_971_752_957_491e2,
    ]);

subregion!(SUB_3I, 0.0041, 25.0, 660.0, 0.910, 0.984, 0.5, 1.0, 4.0,
    i: [0, 0, 0, 1, 1, 1, 1, 2, 3, 3, 4, 4, 4, 5, 5, 5, 7, 7, 8, 8, 10, 12,
        12, 12, 14, 14, 14, 14, 18, 18, 18, 18, 18, 20, 20, 22, 24, 24, 32,
        32, 36, 36],
    j: [0, 1, 10, -4, -2, -1, 0, 0, -5, 0, -3, -2, -1, -6, -1, 12, -4, -3,
        -6, 10, -8, -12, -6, -4, -10, -8, -4, 5, -12, -10, -8, -6, 2, -12,
        -10, -12, -12, -8, -10, -5, -10, -8],
    n: [
         0.106_905_684_359_136e1,
        -0.148_620_857_922_333e1,
         0.259_862_256_980_408e15,
        -0.446_352_055_678_749e-11,
        -0.566_620_757_170_032e-6,
        -0.235_302_885_736_849e-2,
        -0.269_226_321_968_839,
         0.922_024_992_944_392e1,
         0.357_633_505_503_772e-11,
        -0.173_942_565_562_222e2,
         0.700_681_785_556_229e-5,
        -0.267_050_351_075_768e-3,
        -0.231_779_669_675_624e1,
        -0.753_533_046_979_752e-12,
         0.481_337_131_452_891e1,
        -0.223_286_270_422_356e22,
        -0.118_746_004_987_383e-4,
         0.646_412_934_136_496e-2,
        -0.410_588_536_330_937e-9,
         0.422_739_537_057_241e20,
         0.313_698_180_473_812e-12,
         0.164_395_334_345_040e-23,
        -0.339_823_323_754_373e-5,
        -0.135_268_639_905_021e-1,
        -0.723_252_514_211_625e-14,
         0.184_386_437_538_366e-8,
        -0.463_959_533_752_385e-1,
        -0.992_263_100_376_750e14,
         0.688_169_154_439_335e-16,
        -0.222_620_998_452_197e-10,
        -0.540_843_018_624_083e-7,
         0.345_570_606_200_257e-2,
         0.422_275_800_304_086e11,
        -0.126_974_478_770_487e-14,
         0.927_237_985_153_679e-9,
         0.612_670_812_016_489e-13,
        -0.722_693_924_063_497e-11,
        -0.383_669_502_636_822e-3,
         0.374_684_572_410_204e-3,
        -0.931_976_897_511_086e5,
        -0.247_690_616_026_922e-1,
         0.658_110_546_759_474e2,
    ]);

subregion!(SUB_3J, 0.0054, 25.0, 670.0, 0.875, 0.964, 0.5, 1.0, 4.0,
    i: [0, 0, 0, 1, 1, 1, 2, 2, 3, 4, 4, 5, 5, 5, 6, 10, 12, 12, 14, 14,
        14, 16, 18, 20, 20, 24, 24, 28, 28],
    j: [-1, 0, 1, -2, -1, 1, -1, 1, -2, -2, 2, -3, -2, 0, 3, -6, -8, -3,
        -10, -8, -5, -10, -12, -12, -10, -12, -6, -12, -5],
    n: [
         0.586_219_133_817_016e-7,
        -0.894_460_355_005_526e11,
         0.531_168_037_519_774e-30,
         0.109_892_402_329_239,
        -0.575_368_389_425_212e-1,
         0.228_276_853_990_249e5,
        -0.158_548_609_655_002e19,
         0.329_865_748_576_503e-27,
        -0.634_987_981_190_669e-24,
         0.615_762_068_640_611e-8,
        -0.961_109_240_985_747e8,
        -0.406_274_286_652_625e-44,
        -0.471_103_725_498_077e-12,
         0.725_937_724_828_145,
         0.187_768_525_763_682e-38,
        -0.103_308_436_323_771e4,
        -0.662_552_816_342_168e-1,
         0.579_514_041_765_710e3,
         0.237_416_732_616_644e-26,
         0.271_700_235_739_893e-14,
        -0.907_886_213_483_600e2,
        -0.171_242_509_570_207e-36,
         0.156_792_067_854_621e3,
         0.923_261_357_901_470,
        -0.597_865_988_422_577e1,
         0.321_988_767_636_389e7,
        -0.399_441_390_042_203e-29,
         0.493_429_086_046_981e-7,
         0.812_036_983_370_565e-19,
    ]);

subregion!(SUB_3K, 0.0077, 25.0, 680.0, 0.802, 0.935, 1.0, 1.0, 1.0,
    i: [-2, -2, -1, -1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 2, 5, 5, 5, 6, 6,
        6, 8, 8, 8, 8, 10, 12, 12, 12, 14, 14, 14, 14],
    j: [10, 12, -5, 6, -12, -6, -2, -1, 0, 1, 2, 3, 14, -3, 1, 0, -10, -8,
        -6, -8, -8, 6, -12, -10, -8, -6, -12, -12, -10, -8, -12, -12, -10,
        -6],
    n: [
         0.183_573_258_305_700e-5,
         0.137_802_081_946_196e-4,
        -0.143_064_196_963_380e1,
         0.114_557_245_099_729e-9,
        -0.199_205_041_984_129e-30,
         0.118_505_281_316_464e-9,
        -0.833_722_941_797_246,
        -0.146_165_373_593_699e1,
         0.928_502_473_577_227e1,
        -0.125_864_013_412_129e2,
         0.995_875_977_555_837e1,
        -0.333_062_615_619_737e1,
         0.585_685_378_684_675e-16,
        -0.342_871_463_065_009e-2,
         0.514_628_048_057_372e1,
        -0.250_656_721_708_906e1,
        -0.739_741_826_074_471e-26,
         0.101_563_932_127_575e-18,
         0.623_870_202_656_700e-12,
        -0.210_170_989_609_205e-21,
         0.103_334_009_192_454e-18,
         0.160_078_503_434_849e-13,
         0.793_773_985_371_058e-35,
        -0.945_993_590_845_163e-28,
         0.192_841_212_562_851e-21,
        -0.164_565_763_937_947e-15,
         0.366_668_389_329_370e-35,
        -0.710_735_991_210_180e-37,
         0.176_194_073_652_098e-29,
        -0.207_609_474_739_241e-23,
         0.939_454_927_566_235e-39,
        -0.214_530_989_658_070e-39,
         0.169_947_177_701_957e-32,
        -0.375_837_777_773_048e-22,
    ]);

subregion!(SUB_3L, 0.0026, 24.0, 650.0, 0.908, 0.989, 1.0, 1.0, 4.0,
    i: [-12, -12, -12, -12, -12, -10, -10, -8, -8, -8, -8, -8, -8, -8, -6,
        -5, -5, -4, -4, -3, -3, -3, -3, -2, -2, -2, -1, -1, -1, 0, 0, 0, 0,
        1, 1, 2, 4, 5, 5, 6, 10, 10, 14],
    j: [14, 16, 18, 20, 22, 14, 24, 6, 10, 12, 14, 18, 24, 36, 8, 4, 5, 7,
        16, 1, 3, 18, 20, 2, 3, 10, 0, 1, 3, 0, 1, 2, 12, 0, 16, 1, 0, 0,
        1, 14, 4, 12, 10],
    n: [
         0.260_702_058_647_537e10,
        -0.188_277_213_604_704e15,
         0.554_923_870_289_667e19,
        -0.758_966_946_387_758e23,
         0.413_865_186_848_908e27,
        -0.815_038_000_738_060e12,
        -0.381_458_260_489_955e33,
        -0.123_239_564_600_519e-1,
         0.226_095_631_437_174e8,
        -0.495_017_809_506_720e12,
         0.529_482_996_422_863e16,
        -0.444_359_478_746_295e23,
         0.521_635_864_527_315e35,
        -0.487_095_672_740_742e55,
        -0.714_430_209_937_547e6,
         0.127_868_634_615_495,
        -0.100_752_127_917_598e2,
         0.777_451_437_960_990e7,
        -0.108_105_480_796_471e25,
        -0.357_578_581_169_659e-5,
        -0.212_857_169_423_484e1,
         0.270_706_111_085_238e30,
        -0.695_953_622_348_829e33,
         0.110_609_027_472_280,
         0.721_559_163_361_354e2,
        -0.306_367_307_532_219e15,
         0.265_839_618_885_243e-4,
         0.253_392_392_889_754e-1,
        -0.214_443_041_836_579e3,
         0.937_846_601_489_667,
         0.223_184_043_101_700e1,
         0.338_401_222_509_191e2,
         0.494_237_237_179_718e21,
        -0.198_068_404_154_428,
        -0.141_415_349_881_140e31,
        -0.993_862_421_613_651e2,
         0.125_070_534_142_731e3,
        -0.996_473_529_004_439e3,
         0.473_137_909_872_765e5,
         0.116_662_121_219_322e33,
        -0.315_874_976_271_533e16,
        -0.445_703_369_196_945e33,
         0.642_794_932_373_694e33,
    ]);

subregion!(SUB_3M, 0.0028, 23.0, 650.0, 1.000, 0.997, 1.0, 0.25, 1.0,
    i: [0, 3, 8, 20, 1, 3, 4, 5, 1, 6, 2, 4, 14, 2, 5, 3, 0, 1, 1, 1, 28,
        2, 16, 0, 5, 0, 3, 4, 12, 16, 1, 8, 14, 0, 2, 3, 4, 8, 14, 24],
    j: [0, 0, 0, 2, 5, 5, 5, 5, 6, 6, 7, 8, 8, 10, 10, 12, 14, 14, 18, 20,
        20, 22, 22, 24, 24, 28, 28, 28, 28, 28, 32, 32, 32, 36, 36, 36, 36,
        36, 36, 36],
    n: [
         0.811_384_363_481_847,
        -0.568_199_310_990_094e4,
        -0.178_657_198_172_556e11,
         0.795_537_657_613_427e32,
        -0.814_568_209_346_872e5,
        -0.659_774_567_602_874e8,
        -0.152_861_148_659_302e11,
        -0.560_165_667_510_446e12,
         0.458_384_828_593_949e6,
        -0.385_754_000_383_848e14,
         0.453_735_800_004_273e8,
         0.939_454_935_735_563e12,
         0.266_572_856_432_938e28,
        -0.547_578_313_899_097e10,
         0.200_725_701_112_386e15,
         0.185_007_245_563_239e13,
         0.185_135_446_828_337e9,
        -0.170_451_090_076_385e12,
         0.157_890_366_037_614e15,
        -0.202_530_509_748_774e16,
         0.368_193_926_183_570e60,
         0.170_215_539_458_936e18,
         0.639_234_909_918_741e42,
        -0.821_698_160_721_956e15,
        -0.795_260_241_872_306e24,
         0.233_415_869_478_510e18,
        -0.600_079_934_586_803e23,
         0.594_584_382_273_384e25,
         0.189_461_279_349_492e40,
        -0.810_093_428_842_645e46,
         0.188_813_911_076_809e22,
         0.111_052_244_098_768e36,
         0.291_133_958_602_503e46,
        -0.329_421_923_951_460e22,
        -0.137_570_282_536_696e26,
         0.181_508_996_303_902e28,
        -0.346_865_122_768_353e30,
        -0.211_961_148_774_260e38,
        -0.128_617_899_887_675e49,
         0.479_817_895_699_239e65,
    ]);

/// Sub-region 3n is the single exponential form.
const SUB_3N: Subregion = Subregion {
    v_star: 0.0031,
    p_star: 23.0,
    t_star: 650.0,
    a: 0.976,
    b: 0.997,
    c: 1.0,
    d: 1.0,
    e: 1.0,
    exponential: true,
    i: &[0, 3, 4, 6, 7, 10, 12, 14, 18, 0, 3, 5, 6, 8, 12, 0, 3, 7, 12, 2,
        3, 4, 2, 4, 7, 4, 3, 5, 6, 0, 0, 3, 1, 0, 1, 0, 1, 0, 1],
    j: &[-12, -12, -12, -12, -12, -12, -12, -12, -12, -10, -10, -10, -10,
        -10, -10, -8, -8, -8, -8, -6, -6, -6, -5, -5, -5, -4, -3, -3, -3,
        -2, -1, -1, 0, 1, 1, 2, 4, 5, 6],
    n: &[
        0.280_967_799_943_151e-38,
        0.614_869_006_573_609e-30,
        0.582_238_667_048_942e-27,
        0.390_628_369_238_462e-22,
        0.821_445_758_255_119e-20,
        0.402_137_961_842_776e-14,
        0.651_718_171_878_301e-12,
        -0.211_773_355_803_058e-7,
        0.264_953_354_380_072e-2,
        -0.135_031_446_451_331e-31,
        -0.607_246_643_970_893e-23,
        -0.402_352_115_234_494e-18,
        -0.744_938_506_925_544e-16,
        0.189_917_206_526_237e-12,
        0.364_975_183_508_473e-5,
        0.177_274_872_361_946e-25,
        -0.334_952_758_812_999e-18,
        -0.421_537_726_098_389e-8,
        -0.391_048_167_929_649e-2,
        0.541_276_911_564_176e-13,
        0.705_412_100_773_699e-11,
        0.258_585_887_897_486e-8,
        -0.493_111_362_030_162e-10,
        -0.158_649_699_894_543e-5,
        -0.525_037_427_886_100,
        0.220_019_901_729_615e-2,
        -0.643_064_132_636_925e-2,
        0.629_154_149_015_048e2,
        0.135_147_318_617_061e3,
        0.240_560_808_321_713e-6,
        -0.890_763_306_701_305e-3,
        -0.440_209_599_407_714e4,
        -0.302_807_107_747_776e3,
        0.159_158_748_314_599e4,
        0.232_534_272_709_876e6,
        -0.792_681_207_132_600e6,
        -0.869_871_364_662_769e11,
        0.354_542_769_185_671e12,
        0.400_849_240_129_329e15,
    ],
};

subregion!(SUB_3O, 0.0034, 23.0, 650.0, 0.974, 0.996, 0.5, 1.0, 1.0,
    i: [0, 0, 0, 2, 3, 4, 4, 4, 4, 4, 5, 5, 6, 7, 8, 8, 8, 10, 10, 14, 14,
        20, 20, 24],
    j: [-12, -4, -1, -1, -10, -12, -8, -5, -4, -1, -4, -3, -8, -12, -10,
        -8, -4, -12, -8, -12, -8, -12, -10, -12],
    n: [
         0.128_746_023_979_718e-34,
        -0.735_234_770_382_342e-11,
         0.289_078_692_149_150e-2,
         0.244_482_731_907_223,
         0.141_733_492_030_985e-23,
        -0.354_533_853_059_476e-28,
        -0.594_539_202_901_431e-17,
        -0.585_188_401_782_779e-8,
         0.201_377_325_411_803e-5,
         0.138_647_388_209_306e1,
        -0.173_959_365_084_772e-4,
         0.137_680_878_349_369e-2,
         0.814_897_605_805_513e-14,
         0.425_596_631_351_839e-25,
        -0.387_449_113_787_755e-17,
         0.139_814_747_930_240e-12,
        -0.171_849_638_951_521e-2,
         0.641_890_529_513_296e-21,
         0.118_960_578_072_018e-10,
        -0.155_282_762_571_611e-17,
         0.233_907_907_347_507e-7,
        -0.174_093_247_766_213e-12,
         0.377_682_649_089_149e-8,
        -0.516_720_236_575_302e-10,
    ]);

subregion!(SUB_3P, 0.0041, 23.0, 650.0, 0.972, 0.997, 0.5, 1.0, 1.0,
    i: [0, 0, 0, 0, 1, 2, 3, 3, 4, 6, 7, 7, 8, 10, 12, 12, 12, 14, 14, 14,
        16, 18, 20, 22, 24, 24, 36],
    j: [-1, 0, 1, 2, 1, -1, -3, 0, -2, -2, -5, -4, -2, -3, -12, -6, -5,
        -10, -8, -3, -8, -8, -10, -10, -12, -8, -12],
    n: [
        -0.982_825_342_010_366e-4,
         0.105_145_700_850_612e1,
         0.116_033_094_095_084e3,
         0.324_664_750_281_543e4,
        -0.123_592_348_610_137e4,
        -0.561_403_450_013_495e-1,
         0.856_677_401_640_869e-7,
         0.236_313_425_393_924e3,
         0.972_503_292_350_109e-2,
        -0.103_001_994_531_927e1,
        -0.149_653_706_199_162e-8,
        -0.215_743_778_861_592e-4,
        -0.834_452_198_291_445e1,
         0.586_602_660_564_988,
         0.343_480_022_104_968e-25,
         0.816_256_095_947_021e-5,
         0.294_985_697_916_798e-2,
         0.711_730_466_276_584e-16,
         0.400_954_763_806_941e-9,
         0.107_766_027_032_853e2,
        -0.409_449_599_138_182e-6,
        -0.729_121_307_758_902e-5,
         0.677_107_970_938_909e-8,
         0.602_745_973_022_975e-7,
        -0.382_323_011_855_257e-10,
         0.179_946_628_317_437e-2,
        -0.345_042_834_640_005e-3,
    ]);

subregion!(SUB_3Q, 0.0022, 23.0, 650.0, 0.848, 0.983, 1.0, 1.0, 4.0,
    i: [-12, -12, -10, -10, -10, -10, -8, -6, -5, -5, -4, -4, -3, -2, -2,
        -2, -2, -1, -1, -1, 0, 1, 1, 1],
    j: [10, 12, 6, 7, 8, 10, 8, 6, 2, 5, 3, 4, 3, 0, 1, 2, 4, 0, 1, 2, 0,
        0, 1, 3],
    n: [
        -0.820_433_843_259_950e5,
         0.473_271_518_461_586e11,
        -0.805_950_021_005_413e-1,
         0.328_600_025_435_980e2,
        -0.356_617_029_982_490e4,
        -0.172_985_781_433_335e10,
         0.351_769_232_729_192e8,
        -0.775_489_259_985_144e6,
         0.710_346_691_966_018e-4,
         0.993_499_883_820_274e5,
        -0.642_094_171_904_570,
        -0.612_842_816_820_083e4,
         0.232_808_472_983_776e3,
        -0.142_808_220_416_837e-4,
        -0.643_596_060_678_456e-2,
        -0.428_577_227_475_614e1,
         0.225_689_939_161_918e4,
         0.100_355_651_721_510e-2,
         0.333_491_455_143_516,
         0.109_697_576_888_873e1,
         0.961_917_379_376_452,
        -0.838_165_632_204_598e-1,
         0.247_795_908_411_492e1,
        -0.319_114_969_006_533e4,
    ]);

subregion!(SUB_3R, 0.0054, 23.0, 650.0, 0.874, 0.982, 1.0, 1.0, 1.0,
    i: [-8, -8, -3, -3, -3, -3, -3, 0, 0, 0, 0, 3, 3, 8, 8, 8, 8, 10, 10,
        10, 10, 10, 10, 10, 10, 12, 14],
    j: [6, 14, -3, 3, 4, 5, 8, -1, 0, 1, 5, -6, -2, -12, -10, -8, -5, -12,
        -10, -8, -6, -5, -4, -3, -2, -12, -12],
    n: [
         0.144_165_955_660_863e-2,
        -0.701_438_599_628_258e13,
        -0.830_946_716_459_219e-16,
         0.261_975_135_368_109,
         0.393_097_214_706_245e3,
        -0.104_334_030_654_021e5,
         0.490_112_654_154_211e9,
        -0.147_104_222_772_069e-3,
         0.103_602_748_043_408e1,
         0.305_308_890_065_089e1,
        -0.399_745_276_971_264e7,
         0.569_233_719_593_750e-11,
        -0.464_923_504_407_778e-1,
        -0.535_400_396_512_906e-17,
         0.399_988_795_693_162e-12,
        -0.536_479_560_201_811e-6,
         0.159_536_722_411_202e-1,
         0.270_303_248_860_217e-14,
         0.244_247_453_858_506e-7,
        -0.983_430_636_716_454e-5,
         0.663_513_144_224_454e-1,
        -0.993_456_957_845_006e1,
         0.546_491_323_528_491e3,
        -0.143_365_406_393_758e5,
         0.150_764_974_125_511e6,
        -0.337_209_709_340_105e-9,
         0.377_501_980_025_469e-8,
    ]);

subregion!(SUB_3S, 0.0022, 21.0, 640.0, 0.886, 0.990, 1.0, 1.0, 4.0,
    i: [-12, -12, -10, -8, -6, -5, -5, -4, -4, -3, -3, -2, -1, -1, -1, 0,
        0, 0, 0, 1, 1, 3, 3, 3, 4, 4, 4, 5, 14],
    j: [20, 24, 22, 14, 36, 8, 16, 6, 32, 3, 8, 0, 1, 2, 3, 0, 1, 4, 28, 0,
        32, 0, 1, 2, 3, 18, 24, 4, 24],
    n: [
        -0.532_466_612_140_254e23,
         0.100_415_480_000_824e32,
        -0.191_540_001_821_367e30,
         0.105_618_377_808_847e17,
         0.202_281_884_477_061e59,
         0.884_585_472_596_134e8,
         0.166_540_181_638_363e23,
        -0.313_563_197_669_111e6,
        -0.185_662_327_545_064e54,
        -0.624_942_093_918_942e-1,
        -0.504_160_724_132_590e10,
         0.187_514_491_833_092e5,
         0.121_399_979_993_217e-2,
         0.188_317_043_049_455e1,
        -0.167_073_503_962_060e4,
         0.965_961_650_599_775,
         0.294_885_696_802_488e1,
        -0.653_915_627_346_115e5,
         0.604_012_200_163_444e50,
        -0.198_339_358_557_937,
        -0.175_984_090_163_501e58,
         0.356_314_881_403_987e1,
        -0.575_991_255_144_384e3,
         0.456_213_415_338_071e5,
        -0.109_174_044_987_829e8,
         0.437_796_099_975_134e34,
        -0.616_552_611_135_792e46,
         0.193_568_768_917_797e10,
         0.950_898_170_425_042e54,
    ]);

subregion!(SUB_3T, 0.0088, 20.0, 650.0, 0.803, 1.02, 1.0, 1.0, 1.0,
    i: [0, 0, 0, 0, 1, 1, 2, 2, 2, 3, 3, 4, 4, 7, 7, 7, 7, 7, 10, 10, 10,
        10, 10, 18, 20, 22, 22, 24, 28, 32, 32, 32, 36],
    j: [0, 1, 4, 12, 0, 10, 0, 6, 14, 3, 8, 0, 10, 3, 4, 7, 20, 36, 10, 12,
        14, 16, 22, 18, 32, 22, 36, 24, 28, 22, 32, 36, 36],
    n: [
         0.155_287_249_586_268e1,
         0.664_235_115_009_031e1,
        -0.289_366_236_727_210e4,
        -0.385_923_202_309_848e13,
        -0.291_002_915_783_761e1,
        -0.829_088_246_858_083e12,
         0.176_814_899_675_218e1,
        -0.534_686_695_713_469e9,
         0.160_464_608_687_834e18,
         0.196_435_366_560_186e6,
         0.156_637_427_541_729e13,
        -0.178_154_560_260_006e1,
        -0.229_746_237_623_692e16,
         0.385_659_001_648_006e8,
         0.110_554_446_790_543e10,
        -0.677_073_830_687_349e14,
        -0.327_910_592_086_523e31,
        -0.341_552_040_860_644e51,
        -0.527_251_339_709_047e21,
         0.245_375_640_937_055e24,
        -0.168_776_617_209_269e27,
         0.358_958_955_867_578e29,
        -0.656_475_280_339_411e36,
         0.355_286_045_512_301e39,
         0.569_021_454_413_270e58,
        -0.700_584_546_433_113e48,
        -0.705_772_623_326_374e65,
         0.166_861_176_200_148e53,
        -0.300_475_129_680_486e61,
        -0.668_481_295_196_808e51,
         0.428_432_338_620_678e69,
        -0.444_227_367_758_304e72,
        -0.281_396_013_562_745e77,
    ]);

subregion!(SUB_3U, 0.0026, 23.0, 650.0, 0.902, 0.988, 1.0, 1.0, 1.0,
    i: [-12, -10, -10, -10, -8, -8, -8, -6, -6, -5, -5, -5, -3, -1, -1, -1,
        -1, 0, 0, 1, 2, 2, 3, 5, 5, 5, 6, 6, 8, 8, 10, 12, 12, 12, 14, 14,
        14, 14],
    j: [14, 10, 12, 14, 10, 12, 14, 8, 12, 4, 8, 12, 2, -1, 1, 12, 14, -3,
        1, -2, 5, 10, -5, -4, 2, 3, -5, 2, -8, 8, -4, -12, -4, 4, -12, -10,
        -6, 6],
    n: [
         0.122_088_349_258_355e18,
         0.104_216_468_608_488e10,
        -0.882_666_931_564_652e16,
         0.259_929_510_849_499e20,
         0.222_612_779_142_211e15,
        -0.878_473_585_050_085e18,
        -0.314_432_577_551_552e22,
        -0.216_934_916_996_285e13,
         0.159_079_648_196_849e21,
        -0.339_567_617_303_423e3,
         0.884_387_651_337_836e13,
        -0.843_405_926_846_418e21,
         0.114_178_193_518_022e2,
        -0.122_708_229_235_641e-3,
        -0.106_201_671_767_107e3,
         0.903_443_213_959_313e25,
        -0.693_996_270_370_852e28,
         0.648_916_718_965_575e-8,
         0.718_957_567_127_851e4,
         0.105_581_745_346_187e-2,
        -0.651_903_203_602_581e15,
        -0.160_116_813_274_676e25,
        -0.510_254_294_237_837e-8,
        -0.152_355_388_953_402,
         0.677_143_292_290_144e12,
         0.276_378_438_378_930e15,
         0.116_862_983_141_686e-1,
        -0.301_426_947_980_171e14,
         0.169_719_813_884_840e-7,
         0.104_674_840_020_929e27,
        -0.108_016_904_560_140e5,
        -0.990_623_601_934_295e-12,
         0.536_116_483_602_738e7,
         0.226_145_963_747_881e22,
        -0.488_731_565_776_210e-9,
         0.151_001_548_880_670e-4,
        -0.227_700_464_643_920e5,
        -0.781_754_507_698_846e28,
    ]);

subregion!(SUB_3V, 0.0031, 23.0, 650.0, 0.960, 0.995, 1.0, 1.0, 1.0,
    i: [-10, -8, -6, -6, -6, -6, -6, -6, -5, -5, -5, -5, -5, -5, -4, -4,
        -4, -4, -3, -3, -3, -2, -2, -1, -1, 0, 0, 0, 1, 1, 3, 4, 4, 4, 5,
        8, 10, 12, 14],
    j: [-8, -12, -12, -3, 5, 6, 8, 10, 1, 2, 6, 8, 10, 14, -12, -10, -6,
        10, -3, 10, 12, 2, 4, -2, 0, -2, 6, 10, -12, -10, 3, -6, 3, 10, 2,
        -12, -2, -3, 1],
    n: [
        -0.415_652_812_061_591e-54,
         0.177_441_742_924_043e-60,
        -0.357_078_668_203_377e-54,
         0.359_252_213_604_114e-25,
        -0.259_123_736_380_269e2,
         0.594_619_766_193_460e5,
        -0.624_184_007_103_158e11,
         0.313_080_299_915_944e17,
         0.105_006_446_192_036e-8,
        -0.192_824_336_984_852e-5,
         0.654_144_373_749_937e6,
         0.513_117_462_865_044e13,
        -0.697_595_750_347_391e19,
        -0.103_977_184_454_767e29,
         0.119_563_135_540_666e-47,
        -0.436_677_034_051_655e-41,
         0.926_990_036_530_639e-29,
         0.587_793_105_620_748e21,
         0.280_375_725_094_731e-17,
        -0.192_359_972_440_634e23,
         0.742_705_723_302_738e27,
        -0.517_429_682_450_605e2,
         0.820_612_048_645_469e7,
        -0.188_214_882_341_448e-8,
         0.184_587_261_114_837e-1,
        -0.135_830_407_782_663e-5,
        -0.723_681_885_626_348e17,
        -0.223_449_194_054_124e27,
        -0.111_526_741_826_431e-34,
         0.276_032_601_145_151e-28,
         0.134_856_491_567_853e15,
         0.652_440_293_345_860e-9,
         0.510_655_119_774_360e17,
        -0.468_138_358_908_732e32,
        -0.760_667_491_183_279e16,
        -0.417_247_986_986_821e-18,
         0.312_545_677_756_104e14,
        -0.100_375_333_864_186e15,
         0.247_761_392_329_058e27,
    ]);

subregion!(SUB_3W, 0.0039, 23.0, 650.0, 0.959, 0.995, 1.0, 1.0, 4.0,
    i: [-12, -12, -10, -10, -8, -8, -8, -6, -6, -6, -6, -5, -4, -4, -3, -3,
        -2, -2, -1, -1, -1, 0, 0, 1, 2, 2, 3, 3, 5, 5, 5, 8, 8, 10, 10],
    j: [8, 14, -1, 8, 6, 8, 14, -4, -3, 2, 8, -10, -1, 3, -10, 3, 1, 2, -8,
        -4, 1, -12, 1, -1, -1, 2, -12, -5, -10, -8, -6, -12, -10, -12, -8],
    n: [
        -0.586_644_521_713_083e-9,
         0.390_992_887_267_344e1,
         0.923_871_160_092_055e-12,
        -0.269_087_953_034_756e2,
        -0.580_992_985_344_848e-6,
         0.386_724_557_749_053e-4,
        -0.649_554_040_406_077e7,
        -0.745_675_003_061_673e-27,
         0.288_519_949_081_397e-24,
         0.380_650_086_867_437e-9,
        -0.385_555_124_554_706e6,
         0.606_415_813_690_868e-39,
         0.180_505_944_557_999e-15,
         0.312_389_817_896_021e1,
         0.265_897_140_553_871e-34,
        -0.341_830_515_439_283e3,
        -0.695_823_265_707_728e-1,
         0.332_100_041_908_958e2,
        -0.315_343_581_332_903e-24,
        -0.114_641_409_655_493e-11,
         0.239_533_700_348_942e2,
        -0.512_441_310_540_982e-42,
        -0.643_871_171_864_231e1,
         0.108_683_024_794_161e-1,
         0.283_563_012_896_594e-1,
        -0.124_227_710_872_731e3,
         0.108_798_713_336_608e-46,
         0.398_316_392_861_214e-13,
         0.152_115_067_087_106e-31,
         0.253_368_043_372_212e-25,
        -0.541_484_379_269_601e-17,
        -0.349_954_639_589_013e-52,
         0.177_191_360_212_625e-43,
         0.822_882_851_566_347e-53,
        -0.878_723_439_058_982e-44,
    ]);

subregion!(SUB_3X, 0.0049, 23.0, 650.0, 0.910, 0.988, 1.0, 1.0, 1.0,
    i: [-8, -6, -5, -4, -4, -4, -3, -3, -1, 0, 0, 0, 1, 1, 2, 3, 3, 3, 4,
        5, 5, 5, 6, 8, 8, 8, 8, 10, 12, 12, 12, 12, 14, 14, 14, 14],
    j: [14, 10, 10, 1, 2, 14, -2, 12, 5, 0, 4, 10, -10, -1, 6, -12, 0, 8,
        3, -6, -2, 1, 1, -6, -3, 1, 8, -8, -10, -8, -5, -4, -12, -10, -8,
        -6],
    n: [
         0.377_373_741_298_151e19,
        -0.507_100_883_722_913e13,
        -0.103_363_225_598_860e16,
         0.184_790_814_320_773e-5,
        -0.924_729_378_390_945e-3,
        -0.425_999_562_292_738e24,
        -0.462_307_771_873_973e-12,
         0.107_319_065_855_767e22,
         0.648_662_492_280_682e11,
         0.244_200_600_688_281e1,
        -0.851_535_733_484_258e10,
         0.169_894_481_433_592e22,
         0.215_780_222_509_020e-26,
        -0.320_850_551_367_334,
        -0.382_642_448_458_610e17,
        -0.275_386_077_674_421e-28,
        -0.563_199_253_391_666e6,
        -0.326_068_646_279_314e21,
         0.397_949_001_553_184e14,
         0.100_824_008_584_757e-6,
         0.162_234_569_738_433e5,
        -0.432_355_225_319_745e11,
        -0.592_874_245_598_610e12,
         0.133_061_647_281_106e1,
         0.157_338_197_797_544e7,
         0.258_189_614_270_853e14,
         0.262_413_209_706_358e25,
        -0.920_011_937_431_142e-1,
         0.220_213_765_905_426e-2,
        -0.110_433_759_109_547e2,
         0.847_004_870_612_087e7,
        -0.592_910_695_762_536e9,
        -0.183_027_173_269_660e-4,
         0.181_339_603_516_302,
        -0.119_228_759_669_889e4,
         0.430_867_658_061_468e7,
    ]);

subregion!(SUB_3Y, 0.0031, 22.0, 650.0, 0.996, 0.994, 1.0, 1.0, 4.0,
    i: [0, 0, 0, 0, 1, 2, 2, 2, 2, 3, 3, 3, 4, 4, 5, 5, 8, 8, 10, 12],
    j: [-3, 1, 5, 8, 8, -4, -1, 4, 5, -8, 4, 8, -6, 6, -2, 1, -8, -2, -5,
        -8],
    n: [
        -0.525_597_995_024_633e-9,
         0.583_441_305_228_407e4,
        -0.134_778_968_457_925e17,
         0.118_973_500_934_212e26,
        -0.159_096_490_904_708e27,
        -0.315_839_902_302_021e-6,
         0.496_212_197_158_239e3,
         0.327_777_227_273_171e19,
        -0.527_114_657_850_696e22,
         0.210_017_506_281_863e-16,
         0.705_106_224_399_834e21,
        -0.266_713_732_540_246e31,
        -0.145_370_512_554_562e-7,
         0.149_333_917_053_130e28,
        -0.149_795_620_287_641e8,
        -0.381_881_906_271_100e16,
         0.724_660_165_585_797e-4,
        -0.937_808_169_550_193e14,
         0.514_411_468_376_383e10,
        -0.828_198_594_040_141e5,
    ]);

subregion!(SUB_3Z, 0.0038, 22.0, 650.0, 0.993, 0.994, 1.0, 1.0, 4.0,
    i: [-8, -6, -5, -5, -4, -4, -4, -3, -3, -3, -2, -1, 0, 1, 2, 3, 3, 6,
        6, 6, 6, 8, 8],
    j: [3, 6, 6, 8, 5, 6, 8, -2, 5, 6, 2, -6, 3, 1, 6, -6, -2, -6, -5, -4,
        -1, -8, -4],
    n: [
         0.244_007_892_290_650e-10,
        -0.463_057_861_332_321e-1,
         0.288_798_466_512_219e8,
         0.124_522_799_998_268e13,
         0.325_334_886_341_381e10,
        -0.577_898_291_972_316e9,
         0.434_584_416_202_425e12,
        -0.764_942_592_870_382e-11,
         0.845_137_305_155_017e6,
        -0.565_645_863_048_552e10,
         0.152_358_168_337_583e3,
        -0.345_042_834_640_005e-8,
         0.569_969_469_316_139e2,
        -0.700_004_511_287_328e1,
         0.815_334_453_223_008e6,
         0.236_571_594_118_618e-10,
        -0.260_386_945_145_886e-1,
         0.552_828_512_871_041e-10,
        -0.359_967_434_856_460e-6,
         0.941_460_505_792_625e-3,
        -0.228_867_166_209_137e1,
        -0.205_164_614_758_965e-13,
         0.110_423_513_716_176e-6,
    ]);

/// Coefficients of the auxiliary boundary temperatures T_3xy(p).
/// Forms: polynomial in π, or polynomial in ln π for ab/op/wx.
fn t_poly(p: f64, n: &[f64]) -> f64 {
    let mut t = 0.0;
    let mut pk = 1.0;
    for &c in n {
        t += c * pk;
        pk *= p;
    }
    t
}

fn t_log(p: f64, n: &[f64; 5]) -> f64 {
    let l = p.ln();
    n[0] + n[1] * l + n[2] * l * l + n[3] / l + n[4] / (l * l)
}

fn t_3ab(p: f64) -> f64 {
    t_log(p, &[
        0.154_793_642_129_415e4,
        -0.187_661_219_490_113e3,
        0.213_144_632_222_113e2,
        -0.191_887_498_864_292e4,
        0.918_419_702_359_447e3,
    ])
}

fn t_3cd(p: f64) -> f64 {
    t_poly(p, &[
        0.585_276_966_696_349e3,
        0.278_233_532_206_915e1,
        -0.127_283_549_295_878e-1,
        0.159_090_746_562_729e-3,
    ])
}

fn t_3ef(p: f64) -> f64 {
    3.727_888_004 * (p - 22.064) + 647.096
}

fn t_3gh(p: f64) -> f64 {
    t_poly(p, &[
        -0.249_284_240_900_418e5,
        0.428_143_584_791_546e4,
        -0.269_029_173_140_130e3,
        0.751_608_051_114_157e1,
        -0.787_105_249_910_383e-1,
    ])
}

fn t_3ij(p: f64) -> f64 {
    t_poly(p, &[
        0.584_814_781_649_163e3,
        -0.616_179_320_924_617,
        0.260_763_050_899_562,
        -0.587_071_076_864_459e-2,
        0.515_308_185_433_082e-4,
    ])
}

fn t_3jk(p: f64) -> f64 {
    t_poly(p, &[
        0.617_229_772_068_439e3,
        -0.770_600_270_141_675e1,
        0.697_072_596_851_896,
        -0.157_391_839_848_015e-1,
        0.137_897_492_684_194e-3,
    ])
}

fn t_3mn(p: f64) -> f64 {
    t_poly(p, &[
        0.535_339_483_742_384e3,
        0.761_978_122_720_128e1,
        -0.158_365_725_441_648,
        0.192_871_054_508_108e-2,
    ])
}

fn t_3op(p: f64) -> f64 {
    t_log(p, &[
        0.969_461_372_400_213e3,
        -0.332_500_170_441_278e3,
        0.642_859_598_466_067e2,
        0.773_845_935_768_222e3,
        -0.152_313_732_937_084e4,
    ])
}

fn t_3qu(p: f64) -> f64 {
    t_poly(p, &[
        0.565_603_648_239_126e3,
        0.529_062_258_221_222e1,
        -0.102_020_639_611_016,
        0.122_240_301_070_145e-2,
    ])
}

fn t_3rx(p: f64) -> f64 {
    t_poly(p, &[
        0.584_561_202_520_006e3,
        -0.102_961_025_163_669e1,
        0.243_293_362_700_452,
        -0.294_905_044_740_799e-2,
    ])
}

fn t_3uv(p: f64) -> f64 {
    t_poly(p, &[
        0.528_199_646_263_062e3,
        0.890_579_602_135_307e1,
        -0.222_814_134_903_755,
        0.286_791_682_263_697e-2,
    ])
}

fn t_3wx(p: f64) -> f64 {
    t_log(p, &[
        0.728_052_609_145_380e1,
        0.973_505_869_861_952e2,
        0.147_370_491_183_191e2,
        0.329_196_213_998_375e3,
        0.873_371_668_682_417e3,
    ])
}

// Pressure landmarks of the decision tree, MPa.
const P_SAT_643: f64 = 21.043_367_32; // psat(643.15 K)
const P_3UY: f64 = 21.931_615_51; // u/y split below the critical pressure
const P_3ZX: f64 = 21.900_962_65; // z/x split below the critical pressure

/// Backward `v(T,p)` for a single-phase region 3 point, m³/kg.
///
/// The caller guarantees (T,p) lies inside region 3; two-phase inputs are
/// resolved to the side of the saturation line T lies on.
pub(crate) fn v_tp(t: f64, p: f64) -> f64 {
    subregion(t, p).v(t, p)
}

fn subregion(t: f64, p: f64) -> &'static Subregion {
    if p > 40.0 {
        if t <= t_3ab(p) { &SUB_3A } else { &SUB_3B }
    } else if p > 25.0 {
        if t <= t_3cd(p) {
            &SUB_3C
        } else if t <= t_3ab(p) {
            &SUB_3D
        } else if t <= t_3ef(p) {
            &SUB_3E
        } else {
            &SUB_3F
        }
    } else if p > 23.5 {
        if t <= t_3cd(p) {
            &SUB_3C
        } else if t <= t_3gh(p) {
            &SUB_3G
        } else if t <= t_3ef(p) {
            &SUB_3H
        } else if t <= t_3ij(p) {
            &SUB_3I
        } else if t <= t_3jk(p) {
            &SUB_3J
        } else {
            &SUB_3K
        }
    } else if p > 23.0 {
        if t <= t_3cd(p) {
            &SUB_3C
        } else if t <= t_3gh(p) {
            &SUB_3L
        } else if t <= t_3ef(p) {
            &SUB_3H
        } else if t <= t_3ij(p) {
            &SUB_3I
        } else if t <= t_3jk(p) {
            &SUB_3J
        } else {
            &SUB_3K
        }
    } else if p > 22.5 {
        if t <= t_3cd(p) {
            &SUB_3C
        } else if t <= t_3gh(p) {
            &SUB_3L
        } else if t <= t_3mn(p) {
            &SUB_3M
        } else if t <= t_3ef(p) {
            &SUB_3N
        } else if t <= t_3op(p) {
            &SUB_3O
        } else if t <= t_3ij(p) {
            &SUB_3P
        } else if t <= t_3jk(p) {
            &SUB_3J
        } else {
            &SUB_3K
        }
    } else if p > P_SAT_643 {
        if t <= t_3cd(p) {
            &SUB_3C
        } else if t <= t_3qu(p) {
            &SUB_3Q
        } else if t <= t_3rx(p) {
            near_critical(t, p)
        } else if t <= t_3jk(p) {
            &SUB_3R
        } else {
            &SUB_3K
        }
    } else if p > 20.5 {
        if t <= t_3cd(p) {
            &SUB_3C
        } else if t <= region4::tsat(p) {
            &SUB_3S
        } else if t <= t_3jk(p) {
            &SUB_3R
        } else {
            &SUB_3K
        }
    } else {
        // p down to psat(623.15 K)
        if t <= t_3cd(p) {
            &SUB_3C
        } else if t <= region4::tsat(p) {
            &SUB_3S
        } else {
            &SUB_3T
        }
    }
}

/// The auxiliary u/v/w/x/y/z split between T_3qu(p) and T_3rx(p);
/// only reached for psat(643.15 K) < p ≤ 22.5 MPa.
fn near_critical(t: f64, p: f64) -> &'static Subregion {
    if p > 22.11 {
        if t <= t_3uv(p) {
            &SUB_3U
        } else if t <= t_3ef(p) {
            &SUB_3V
        } else if t <= t_3wx(p) {
            &SUB_3W
        } else {
            &SUB_3X
        }
    } else if p > P_CRIT {
        if t <= t_3uv(p) {
            &SUB_3U
        } else if t <= t_3ef(p) {
            &SUB_3Y
        } else if t <= t_3wx(p) {
            &SUB_3Z
        } else {
            &SUB_3X
        }
    } else if t <= region4::tsat(p) {
        if p > P_3UY && t > t_3uv(p) {
            &SUB_3Y
        } else {
            &SUB_3U
        }
    } else if p > P_3ZX && t <= t_3wx(p) {
        &SUB_3Z
    } else {
        &SUB_3X
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::assert_if97_eq;
    use rstest::rstest;

    /// True when (T,p) sits inside the region 3 envelope (between
    /// 623.15 K, the B23 curve, and 100 MPa).
    fn contains(t: f64, p: f64) -> bool {
        t >= crate::units::T_13 && p <= 100.0 && p >= crate::regions::boundaries::b23_p(t)
    }

    // IAPWS SR5-05(2016), table 5 (sub-regions 3a and 3b).
    #[rstest]
    #[case(670.0, 80.0, 0.150_383_135_9e-2)]
    #[case(710.0, 50.0, 0.220_472_858_7e-2)]
    #[case(750.0, 80.0, 0.197_369_294_0e-2)]
    fn backward_v_matches_table_5(#[case] t: f64, #[case] p: f64, #[case] v: f64) {
        assert_if97_eq!(v_tp(t, p), v, 1e-6);
    }

    #[test]
    fn subregion_dispatch_is_stable_across_band_edges() {
        // The decision tree must return a finite volume on both sides of
        // every pressure band edge.
        for &p in &[100.0, 40.0, 25.0, 23.5, 23.0, 22.5, 22.11, 22.064, 21.5, 20.5, 19.0, 17.0] {
            for &t in &[625.0, 640.0, 647.0, 650.0, 660.0, 680.0, 730.0] {
                if contains(t, p) {
                    let v = v_tp(t, p);
                    assert!(v.is_finite() && v > 0.0, "v(T={t}, p={p}) = {v}");
                }
            }
        }
    }
}
