//! Fixed table of pseudo-random positions in `[0, 1)`
//!
//! Every sampler reads from this table instead of a platform random number
//! generator, which keeps generation reproducible across runs and machines.

/// Number of entries in [`SEED_SEQUENCE`]
pub const SEED_SEQUENCE_LEN: usize = 512;

/// Precomputed positions consumed by [`crate::sampling::weighted::WeightedSampler`]
pub const SEED_SEQUENCE: [f64; SEED_SEQUENCE_LEN] = [
    0.130_939_741_386_1, 0.639_262_098_777_2, 0.957_307_995_728_2, 0.893_839_414_012_7,
    0.454_801_692_957_3, 0.938_748_869_565_1, 0.057_840_794_404_3, 0.837_904_112_896_3,
    0.403_119_814_992_7, 0.556_372_238_527_5, 0.535_733_697_820_1, 0.613_621_117_446_1,
    0.808_543_738_270_5, 0.123_649_436_093_7, 0.755_473_303_285_1, 0.523_298_872_329_2,
    0.759_664_676_659_3, 0.650_887_639_014_6, 0.267_883_560_754_4, 0.516_304_955_245_6,
    0.374_689_769_294_5, 0.734_125_949_572_3, 0.510_195_907_931_7, 0.320_680_930_225_9,
    0.027_272_706_469_8, 0.688_278_915_467_4, 0.134_771_251_250_8, 0.504_194_531_803_1,
    0.687_600_737_707_7, 0.770_318_310_106_7, 0.417_305_510_445_8, 0.839_281_276_817_6,
    0.692_337_953_447_6, 0.633_906_386_442_1, 0.472_843_876_572_5, 0.770_748_726_666_7,
    0.420_991_429_568_4, 0.829_812_964_026_3, 0.113_357_055_694_4, 0.407_545_012_467_3,
    0.187_087_533_543_9, 0.259_595_923_736_0, 0.845_327_702_474_9, 0.943_103_077_215_7,
    0.773_555_884_396_4, 0.659_517_954_686_6, 0.167_136_253_672_1, 0.105_842_619_505_6,
    0.867_863_718_115_5, 0.138_291_566_675_2, 0.517_800_508_558_1, 0.496_285_323_347_7,
    0.096_539_295_044_0, 0.612_210_357_495_6, 0.051_633_248_769_2, 0.324_352_335_599_6,
    0.385_471_478_297_1, 0.513_320_427_273_9, 0.632_329_622_514_7, 0.734_992_297_818_2,
    0.605_478_165_131_4, 0.444_694_635_959_2, 0.881_251_330_902_8, 0.133_805_976_824_0,
    0.020_759_869_383_7, 0.153_850_056_721_3, 0.712_239_927_516_9, 0.824_199_652_594_1,
    0.340_874_948_424_0, 0.197_406_003_137_2, 0.535_847_254_655_0, 0.406_011_288_507_1,
    0.784_366_661_348_9, 0.282_196_048_932_6, 0.176_311_307_236_6, 0.245_231_244_457_4,
    0.608_482_916_952_3, 0.136_523_999_328_5, 0.426_888_965_197_0, 0.785_238_907_133_1,
    0.771_829_657_719_0, 0.009_933_628_532_9, 0.038_483_389_414_7, 0.650_007_563_766_0,
    0.377_254_663_886_1, 0.109_861_676_163_2, 0.493_403_363_469_6, 0.303_834_223_421_6,
    0.850_530_649_625_0, 0.867_284_503_975_9, 0.519_661_106_654_2, 0.615_403_412_817_2,
    0.870_564_316_614_2, 0.260_684_931_689_1, 0.251_056_189_355_5, 0.503_227_748_092_8,
    0.558_512_849_914_5, 0.342_019_982_962_1, 0.490_343_738_333_7, 0.332_647_531_243_4,
    0.829_237_304_936_3, 0.596_530_125_808_6, 0.000_473_692_981_8, 0.657_684_937_836_3,
    0.806_857_154_791_2, 0.622_173_298_242_2, 0.891_530_614_596_3, 0.648_630_544_860_8,
    0.464_786_459_991_6, 0.310_647_006_299_3, 0.695_770_810_540_6, 0.963_395_032_363_5,
    0.008_141_373_668_8, 0.589_450_467_478_4, 0.531_112_856_358_8, 0.487_313_350_703_0,
    0.076_691_610_885_8, 0.298_770_438_487_6, 0.951_462_423_275_6, 0.394_433_166_898_9,
    0.457_742_781_994_4, 0.130_863_576_159_3, 0.169_670_623_427_2, 0.134_821_167_884_7,
    0.948_695_919_767_5, 0.645_750_819_830_9, 0.195_617_748_157_6, 0.645_230_384_856_0,
    0.944_448_593_742_0, 0.551_916_647_465_6, 0.771_131_308_061_4, 0.132_262_967_247_3,
    0.981_518_239_695_5, 0.859_199_690_909_4, 0.035_779_272_950_1, 0.330_328_810_049_8,
    0.050_830_577_328_9, 0.448_083_612_962_8, 0.460_077_445_130_1, 0.606_187_828_880_4,
    0.153_120_963_425_6, 0.707_768_340_220_1, 0.513_990_684_344_3, 0.427_755_256_860_4,
    0.956_711_873_651_5, 0.674_280_394_528_9, 0.047_267_432_027_9, 0.459_960_911_652_7,
    0.567_971_094_576_8, 0.785_959_881_610_7, 0.214_510_947_289_5, 0.872_687_576_647_5,
    0.462_596_023_705_5, 0.253_167_316_122_0, 0.081_450_134_918_2, 0.486_546_142_295_4,
    0.202_047_197_994_3, 0.191_957_415_879_8, 0.134_724_102_788_2, 0.133_768_333_621_9,
    0.822_076_441_411_9, 0.732_240_685_397_0, 0.056_573_152_508_8, 0.357_432_609_298_9,
    0.588_344_726_950_0, 0.243_793_368_762_7, 0.593_661_998_790_2, 0.291_333_250_042_2,
    0.370_952_229_246_1, 0.617_536_890_540_0, 0.185_533_943_043_1, 0.399_560_342_630_2,
    0.352_906_997_763_1, 0.509_537_425_883_5, 0.327_843_008_077_7, 0.686_763_394_267_8,
    0.591_876_427_360_2, 0.156_326_761_165_5, 0.931_006_841_866_4, 0.302_768_611_533_5,
    0.082_624_763_221_7, 0.168_092_129_789_3, 0.895_065_445_593_8, 0.458_930_044_949_9,
    0.387_915_446_033_3, 0.836_046_925_679_1, 0.619_387_183_168_2, 0.266_809_804_979_8,
    0.917_459_291_024_3, 0.261_607_833_948_0, 0.578_511_357_616_4, 0.221_535_798_625_7,
    0.231_678_727_471_2, 0.372_989_239_154_1, 0.964_258_634_501_4, 0.765_558_385_802_7,
    0.804_201_308_761_7, 0.046_092_447_224_7, 0.081_605_032_167_8, 0.802_736_727_101_1,
    0.202_548_533_458_3, 0.586_266_416_310_1, 0.821_534_489_078_7, 0.026_302_535_012_7,
    0.035_304_385_886_3, 0.609_634_305_074_7, 0.389_153_762_307_5, 0.880_221_246_142_1,
    0.597_543_550_287_0, 0.230_554_925_818_9, 0.732_583_631_524_1, 0.530_412_337_807_6,
    0.848_965_949_247_5, 0.598_594_598_640_0, 0.014_496_765_969_5, 0.132_075_050_139_1,
    0.669_964_977_807_2, 0.784_399_077_027_2, 0.571_890_020_782_0, 0.371_398_239_678_3,
    0.527_156_752_447_1, 0.841_169_483_015_0, 0.561_300_131_001_3, 0.448_374_005_853_4,
    0.703_417_177_960_5, 0.128_060_604_154_1, 0.004_074_114_728_6, 0.304_539_143_497_0,
    0.787_963_903_089_9, 0.099_198_204_439_9, 0.083_614_303_779_4, 0.134_760_625_355_7,
    0.248_941_488_573_0, 0.275_378_679_564_3, 0.392_924_175_290_3, 0.183_141_558_978_5,
    0.531_182_820_868_6, 0.450_990_955_459_8, 0.224_822_412_393_0, 0.179_066_722_290_0,
    0.893_996_224_282_7, 0.168_549_936_770_3, 0.538_638_451_106_2, 0.568_711_303_747_5,
    0.680_040_111_473_1, 0.634_366_894_845_9, 0.985_815_227_200_0, 0.752_133_583_210_0,
    0.521_239_230_038_7, 0.965_781_711_073_1, 0.543_353_832_133_5, 0.034_939_500_678_3,
    0.168_597_406_467_4, 0.301_260_221_313_4, 0.101_142_694_920_0, 0.064_179_530_447_8,
    0.577_600_752_204_5, 0.151_853_054_005_7, 0.742_506_387_027_1, 0.489_333_210_183_3,
    0.533_840_280_677_4, 0.908_831_120_727_5, 0.482_616_943_000_1, 0.517_432_000_759_7,
    0.564_868_784_597_9, 0.331_506_533_567_2, 0.527_772_197_078_8, 0.681_635_674_691_0,
    0.056_595_628_757_6, 0.646_993_495_358_4, 0.837_708_675_819_3, 0.644_199_323_788_4,
    0.010_576_484_125_8, 0.134_779_120_346_0, 0.926_435_081_650_0, 0.215_144_361_365_2,
    0.509_841_120_749_8, 0.615_940_958_155_9, 0.775_672_578_054_8, 0.910_946_147_438_5,
    0.152_776_116_486_8, 0.990_637_137_684_4, 0.532_766_284_850_9, 0.327_835_778_056_7,
    0.145_037_056_580_4, 0.466_654_639_787_0, 0.601_438_752_353_6, 0.644_947_605_107_6,
    0.368_995_034_850_8, 0.940_766_227_086_8, 0.076_674_352_542_8, 0.772_245_456_804_3,
    0.606_385_756_643_9, 0.760_616_701_521_5, 0.312_892_964_103_0, 0.475_296_308_306_8,
    0.596_644_183_494_5, 0.939_110_739_793_1, 0.989_624_683_523_1, 0.702_619_801_372_5,
    0.603_320_344_441_7, 0.399_075_309_434_2, 0.098_522_522_203_1, 0.992_007_399_015_7,
    0.160_054_154_932_0, 0.601_496_958_989_8, 0.083_380_440_063_0, 0.891_339_531_611_6,
    0.983_927_900_779_2, 0.200_076_866_195_8, 0.874_936_248_388_8, 0.957_297_708_218_9,
    0.431_209_722_783_9, 0.018_523_529_114_1, 0.629_722_686_082_3, 0.524_683_220_300_1,
    0.695_480_420_053_8, 0.232_587_140_711_9, 0.927_371_448_722_3, 0.702_558_390_834_5,
    0.991_098_581_154_6, 0.538_344_943_501_9, 0.798_092_361_608_1, 0.300_900_566_314_4,
    0.392_201_056_899_1, 0.243_725_593_942_9, 0.239_187_411_503_9, 0.981_128_465_599_8,
    0.832_643_573_183_7, 0.822_349_692_775_4, 0.441_350_746_143_7, 0.794_381_138_158_2,
    0.037_082_566_024_3, 0.753_652_574_123_3, 0.343_570_364_579_3, 0.363_719_535_946_8,
    0.686_090_129_241_0, 0.832_099_425_341_9, 0.898_816_753_821_6, 0.405_416_122_395_0,
    0.047_144_534_988_1, 0.581_445_048_219_0, 0.156_045_675_248_2, 0.708_154_841_522_2,
    0.788_406_945_557_6, 0.506_466_521_780_8, 0.681_568_318_753_7, 0.593_152_730_594_8,
    0.457_416_653_021_7, 0.570_204_295_222_2, 0.730_406_705_882_0, 0.542_815_336_027_8,
    0.767_738_776_565_7, 0.651_097_516_533_7, 0.038_352_478_648_0, 0.775_074_115_153_5,
    0.627_125_877_512_3, 0.166_749_922_370_6, 0.587_126_692_630_8, 0.720_595_729_624_5,
    0.320_864_183_584_3, 0.228_954_080_161_8, 0.798_679_899_131_8, 0.500_559_153_262_2,
    0.375_839_115_538_7, 0.261_141_660_900_7, 0.881_449_541_362_4, 0.656_075_761_532_0,
    0.032_959_105_490_2, 0.693_248_103_054_0, 0.946_535_243_774_0, 0.063_021_481_790_5,
    0.091_131_570_928_8, 0.036_180_831_933_2, 0.112_908_340_971_7, 0.956_452_894_219_5,
    0.022_257_961_482_1, 0.685_711_967_346_9, 0.436_659_013_409_9, 0.797_081_747_376_3,
    0.054_103_321_913_3, 0.780_242_029_610_9, 0.176_502_249_836_0, 0.508_916_876_183_9,
    0.495_103_510_220_0, 0.440_164_235_702_1, 0.638_982_757_588_0, 0.559_896_007_465_7,
    0.085_633_054_338_2, 0.644_641_149_798_3, 0.080_056_561_259_4, 0.559_963_821_677_1,
    0.768_847_708_131_1, 0.654_589_891_454_8, 0.889_069_994_605_7, 0.425_170_492_086_7,
    0.676_206_760_235_8, 0.206_289_633_554_2, 0.703_325_658_025_7, 0.548_361_602_369_6,
    0.415_912_470_306_4, 0.845_502_894_850_3, 0.506_476_803_579_7, 0.370_244_476_582_8,
    0.746_583_477_204_3, 0.730_534_433_617_4, 0.848_548_210_716_7, 0.968_872_648_491_8,
    0.150_218_325_105_1, 0.599_822_937_513_7, 0.448_014_272_490_7, 0.154_308_932_997_0,
    0.978_270_418_160_9, 0.875_118_644_898_9, 0.009_276_351_967_3, 0.923_977_593_542_0,
    0.508_271_186_750_5, 0.126_989_503_670_5, 0.437_460_749_599_7, 0.450_727_197_326_1,
    0.881_003_178_775_2, 0.180_794_880_501_0, 0.090_494_697_197_4, 0.798_177_631_754_8,
    0.624_346_502_865_4, 0.859_159_359_131_4, 0.350_765_952_141_3, 0.894_083_021_244_0,
    0.175_078_765_384_2, 0.268_737_001_789_7, 0.301_399_746_665_6, 0.758_382_329_809_6,
    0.135_552_337_140_5, 0.529_675_787_045_0, 0.392_438_663_391_9, 0.972_575_859_878_0,
    0.196_364_094_894_0, 0.244_052_504_825_2, 0.196_656_354_244_1, 0.981_964_099_730_3,
    0.677_610_723_606_1, 0.579_116_135_909_6, 0.297_510_560_938_0, 0.066_003_763_499_0,
    0.845_632_094_957_7, 0.553_308_721_412_8, 0.938_837_757_830_2, 0.464_708_981_802_8,
    0.212_205_124_871_4, 0.665_770_518_019_4, 0.442_014_184_037_2, 0.057_147_143_637_2,
    0.840_932_635_802_8, 0.827_060_648_484_9, 0.364_871_927_967_2, 0.723_932_410_478_1,
    0.524_961_926_096_1, 0.575_249_795_986_4, 0.729_555_215_646_6, 0.686_532_776_861_8,
    0.691_688_648_158_8, 0.493_775_050_716_7, 0.043_547_836_919_6, 0.269_214_210_806_8,
    0.124_647_577_680_1, 0.550_348_953_896_4, 0.804_968_257_241_1, 0.400_502_579_569_4,
    0.008_345_154_599_9, 0.755_367_812_170_8, 0.010_979_193_196_7, 0.919_225_206_982_7,
    0.023_845_045_518_8, 0.535_210_030_615_6, 0.949_963_150_446_6, 0.315_735_178_149_6,
    0.299_449_745_991_7, 0.468_657_194_020_0, 0.540_454_208_782_7, 0.713_873_706_262_8,
    0.088_298_460_928_1, 0.158_106_946_187_7, 0.299_785_205_282_6, 0.568_938_188_159_5,
    0.214_117_711_066_7, 0.253_121_748_030_8, 0.602_462_121_921_0, 0.844_034_476_014_4,
    0.143_655_733_267_7, 0.937_504_370_647_7, 0.690_720_676_243_8, 0.928_484_329_739_9,
    0.722_136_998_667_8, 0.711_827_267_647_8, 0.215_908_242_887_1, 0.200_304_436_203_6,
    0.858_759_860_562_5, 0.872_861_132_576_6, 0.909_902_819_427_5, 0.226_934_817_096_5,
    0.862_736_208_376_5, 0.282_284_903_514_4, 0.824_524_371_113_7, 0.927_648_281_205_0,
    0.109_293_337_054_3, 0.466_996_011_993_3, 0.736_842_345_278_7, 0.685_610_850_456_8,
    0.807_194_395_392_2, 0.070_126_410_630_8, 0.177_381_064_241_7, 0.611_682_453_072_6,
];

/// Position for the given seed after `offset` draws
///
/// Wraps around the table so any seed and draw count map to an entry.
pub fn seed_position(seed: u32, offset: usize) -> f64 {
    let index = (seed as usize).wrapping_add(offset) % SEED_SEQUENCE_LEN;
    SEED_SEQUENCE.get(index).copied().unwrap_or(0.0)
}
