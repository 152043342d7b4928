use strand_bsdf::core::pbrt::*;

use std::sync::Arc;

fn random_hemisphere(rng: &mut RNG) -> Vector3f {
    return uniform_sample_hemisphere(&Vector2f::new(rng.uniform_float(), rng.uniform_float()));
}

fn relative_eq(a: &Spectrum, b: &Spectrum, eps: Float) -> bool {
    for i in 0..3 {
        let m = Float::max(a[i].abs(), b[i].abs()).max(1e-6);
        if (a[i] - b[i]).abs() > eps * m {
            return false;
        }
    }
    return true;
}

fn microfacet(r: Float, alpha: Float) -> MicrofacetReflection {
    let distrib: Arc<dyn MicrofacetDistribution> =
        Arc::new(TrowbridgeReitzDistribution::new(alpha, alpha, true));
    let fresnel: Arc<dyn Fresnel> = Arc::new(FresnelDielectric::new(1.0, 1.5));
    return MicrofacetReflection::new(&Spectrum::from(r), distrib, fresnel);
}

// Shading frame tilted away from the world axes.
fn interaction() -> SurfaceInteraction {
    let n = Normal3f::new(0.2, -0.3, 1.0).normalize();
    let si = SurfaceInteraction::new(
        &Point3f::new(1.0, 2.0, 3.0),
        &Point2f::new(0.25, 0.75),
        &n,
        &Vector3f::new(1.0, 0.1, 0.0),
        &n,
    );
    si.check_frame().unwrap();
    return si;
}

fn aggregate() -> BSDF {
    let mut bsdf = BSDF::new(&interaction(), 1.0);
    bsdf.add_weighted(
        &Spectrum::new(0.5, 0.4, 0.3),
        BxDFEnum::from(LambertianReflection::new(&Spectrum::one())),
    );
    bsdf.add_weighted(
        &Spectrum::from(0.3),
        BxDFEnum::from(OrenNayar::new(&Spectrum::one(), 20.0)),
    );
    bsdf.add_weighted(&Spectrum::from(0.7), BxDFEnum::from(microfacet(1.0, 0.3)));
    return bsdf;
}

fn check_reciprocity(bxdf: &dyn BxDF, description: &str) {
    let mut rng = RNG::new_sequence(11);
    for _ in 0..5000 {
        let wo = random_hemisphere(&mut rng);
        let wi = random_hemisphere(&mut rng);
        let a = bxdf.f(&wo, &wi);
        let b = bxdf.f(&wi, &wo);
        assert!(
            relative_eq(&a, &b, 1e-4),
            "{}: f(wo, wi) = {:?}, f(wi, wo) = {:?}",
            description,
            a,
            b
        );
    }
}

#[test]
fn lambertian_is_reciprocal() {
    check_reciprocity(
        &LambertianReflection::new(&Spectrum::new(0.2, 0.5, 0.8)),
        "lambertian",
    );
}

#[test]
fn oren_nayar_is_reciprocal() {
    check_reciprocity(&OrenNayar::new(&Spectrum::from(0.5), 30.0), "oren-nayar");
}

#[test]
fn microfacet_is_reciprocal() {
    for alpha in [0.1, 0.3, 0.8] {
        check_reciprocity(&microfacet(0.9, alpha), "microfacet");
    }
}

#[test]
fn aggregate_is_reciprocal() {
    let bsdf = aggregate();
    let mut rng = RNG::new_sequence(12);
    for _ in 0..5000 {
        let wo = bsdf.local_to_world(&random_hemisphere(&mut rng));
        let wi = bsdf.local_to_world(&random_hemisphere(&mut rng));
        let a = bsdf.f(&wo, &wi, BSDF_ALL);
        let b = bsdf.f(&wi, &wo, BSDF_ALL);
        assert!(relative_eq(&a, &b, 1e-3), "{:?} != {:?}", a, b);
    }
}

#[test]
fn frame_round_trip() {
    let bsdf = aggregate();
    assert!((Vector3f::dot(&bsdf.ss, &bsdf.ns)).abs() < 1e-5);
    assert!((Vector3f::dot(&bsdf.ts, &bsdf.ns)).abs() < 1e-5);
    assert!((bsdf.ss.length() - 1.0).abs() < 1e-5);
    let mut rng = RNG::new_sequence(13);
    for _ in 0..100 {
        let w = uniform_sample_sphere(&Vector2f::new(rng.uniform_float(), rng.uniform_float()));
        let back = bsdf.local_to_world(&bsdf.world_to_local(&w));
        assert!((back - w).length() < 1e-5);
    }
    let local = bsdf.world_to_local(&bsdf.ns);
    assert!((local.z - 1.0).abs() < 1e-5);
}

#[test]
fn aggregate_sampled_pdf_matches_pdf() {
    let bsdf = aggregate();
    let mut rng = RNG::new_sequence(14);
    let mut picked = [0usize; 3];
    for _ in 0..20000 {
        let wo = bsdf.local_to_world(&random_hemisphere(&mut rng));
        let u = BsdfSample::from_source(&mut rng);
        let probs = bsdf.selection_probabilities(&wo, BSDF_ALL);
        let mut acc: Float = 0.0;
        for (i, p) in probs.iter().enumerate() {
            acc += *p;
            if u.u_component < acc {
                picked[i] += 1;
                break;
            }
        }
        if let Some((f, wi, pdf, _)) = bsdf.sample_f(&wo, &u, BSDF_ALL) {
            let expected = bsdf.pdf(&wo, &wi, BSDF_ALL);
            assert!(
                (pdf - expected).abs() <= 1e-3 * expected.max(1.0),
                "{} != {}",
                pdf,
                expected
            );
            let fe = bsdf.f(&wo, &wi, BSDF_ALL);
            assert!(relative_eq(&f, &fe, 1e-3), "{:?} != {:?}", f, fe);
        }
    }
    // Selection follows the luminance of the entry weights.
    let probs = bsdf.selection_probabilities(&bsdf.ns, BSDF_ALL);
    let total: Float = probs.iter().sum();
    assert!((total - 1.0).abs() < 1e-5);
    assert!(probs[2] > probs[1]);
    assert!(picked.iter().all(|n| *n > 0));
}

#[test]
fn aggregate_albedo_estimators_agree() {
    let bsdf = aggregate();
    let mut rng = RNG::new_sequence(15);
    let wo = bsdf.local_to_world(&Vector3f::new(0.3, 0.2, 0.9327379).normalize());
    let count = 200000;
    let mut importance = Spectrum::zero();
    let mut uniform = Spectrum::zero();
    for _ in 0..count {
        let u = BsdfSample::from_source(&mut rng);
        if let Some((f, wi, pdf, _)) = bsdf.sample_f(&wo, &u, BSDF_ALL) {
            importance += f * (Vector3f::abs_dot(&wi, &bsdf.ns) / pdf);
        }
        let wi = bsdf.local_to_world(&uniform_sample_hemisphere(&u.u2()));
        uniform += bsdf.f(&wo, &wi, BSDF_ALL)
            * (Vector3f::abs_dot(&wi, &bsdf.ns) / uniform_hemisphere_pdf());
    }
    let importance = importance * (1.0 / count as Float);
    let uniform = uniform * (1.0 / count as Float);
    let err = Float::abs(importance.y() - uniform.y()) / uniform.y();
    assert!(err < 0.03, "{:?} vs {:?}", importance, uniform);
}

#[test]
fn lambertian_albedo() {
    let r = Spectrum::new(0.2, 0.5, 0.8);
    let lambert = LambertianReflection::new(&r);
    let mut rng = RNG::new_sequence(16);
    let wo = Vector3f::new(0.0, 0.6, 0.8);
    let count = 50000;
    let mut sum = Spectrum::zero();
    for _ in 0..count {
        let u = BsdfSample::from_source(&mut rng);
        if let Some((f, wi, pdf, t)) = lambert.sample_f(&wo, &u) {
            assert_eq!(t, BSDF_REFLECTION | BSDF_DIFFUSE);
            assert!(wi.z >= 0.0);
            sum += f * (abs_cos_theta(&wi) / pdf);
        }
    }
    let avg = sum * (1.0 / count as Float);
    // cosine sampling makes every weight exactly r
    assert!(Spectrum::near_equal(&avg, &r, 1e-3), "{:?}", avg);
    assert_eq!(lambert.rho(&wo, &[]), r);
}

#[test]
fn flags_filter_entries() {
    let bsdf = aggregate();
    assert_eq!(bsdf.num_components(BSDF_ALL), 3);
    assert_eq!(bsdf.num_components(BSDF_REFLECTION | BSDF_DIFFUSE), 2);
    assert_eq!(bsdf.num_components(BSDF_REFLECTION | BSDF_GLOSSY), 1);
    assert_eq!(bsdf.num_components(BSDF_TRANSMISSION), 0);

    let wo = bsdf.ns;
    let wi = bsdf.local_to_world(&Vector3f::new(0.6, 0.0, 0.8));
    let diffuse = bsdf.f(&wo, &wi, BSDF_REFLECTION | BSDF_DIFFUSE);
    let all = bsdf.f(&wo, &wi, BSDF_ALL);
    assert!(all.y() > diffuse.y());
    // reflection-only entries never transmit
    let below = bsdf.local_to_world(&Vector3f::new(0.6, 0.0, -0.8));
    assert!(bsdf.f(&wo, &below, BSDF_ALL).is_black());

    let u = BsdfSample::new(0.5, [0.5, 0.5, 0.5, 0.5]);
    assert!(bsdf.sample_f(&wo, &u, BSDF_TRANSMISSION).is_none());
}

#[test]
fn zero_cosine_outgoing_is_empty() {
    let n = Normal3f::new(0.0, 0.0, 1.0);
    let si = SurfaceInteraction::new(
        &Point3f::zero(),
        &Point2f::zero(),
        &n,
        &Vector3f::new(1.0, 0.0, 0.0),
        &n,
    );
    let mut bsdf = BSDF::new(&si, 1.0);
    bsdf.add(BxDFEnum::from(LambertianReflection::new(&Spectrum::one())));
    bsdf.add(BxDFEnum::from(microfacet(1.0, 0.3)));
    let wo = bsdf.ss;
    let wi = bsdf.ns;
    assert!(bsdf.f(&wo, &wi, BSDF_ALL).is_black());
    assert_eq!(bsdf.pdf(&wo, &wi, BSDF_ALL), 0.0);
    let u = BsdfSample::new(0.1, [0.2, 0.3, 0.4, 0.5]);
    assert!(bsdf.sample_f(&wo, &u, BSDF_ALL).is_none());
}

// Models outside the closed set go through `BxDFEnum::Dyn`.
struct Tinted {
    r: Spectrum,
}

impl BxDF for Tinted {
    fn f(&self, _wo: &Vector3f, _wi: &Vector3f) -> Spectrum {
        return self.r * INV_PI;
    }

    fn sample_f(
        &self,
        wo: &Vector3f,
        sample: &BsdfSample,
    ) -> Option<(Spectrum, Vector3f, Float, BxDFType)> {
        self.sample_f_default(wo, sample)
    }

    fn pdf(&self, wo: &Vector3f, wi: &Vector3f) -> Float {
        self.pdf_default(wo, wi)
    }

    fn get_type(&self) -> BxDFType {
        return BSDF_REFLECTION | BSDF_DIFFUSE;
    }
}

#[test]
fn custom_models_join_the_aggregate() {
    let r = Spectrum::new(0.1, 0.2, 0.3);
    let n = Normal3f::new(0.0, 0.0, 1.0);
    let si = SurfaceInteraction::new(
        &Point3f::zero(),
        &Point2f::zero(),
        &n,
        &Vector3f::new(1.0, 0.0, 0.0),
        &n,
    );
    let mut bsdf = BSDF::new(&si, 1.0);
    let custom: Arc<dyn BxDF> = Arc::new(Tinted { r });
    bsdf.add(BxDFEnum::Dyn(custom));
    bsdf.add(BxDFEnum::from(LambertianReflection::new(&r)));

    let wo = Vector3f::new(0.0, 0.6, 0.8);
    let wi = Vector3f::new(0.6, 0.0, 0.8);
    let f = bsdf.f(&wo, &wi, BSDF_ALL);
    assert!(Spectrum::near_equal(&f, &(r * (2.0 * INV_PI)), 1e-6));
    let pdf = bsdf.pdf(&wo, &wi, BSDF_ALL);
    assert!((pdf - 0.8 * INV_PI).abs() < 1e-6);
    let u = BsdfSample::new(0.25, [0.3, 0.6, 0.0, 0.0]);
    let (_, wi, _, t) = bsdf.sample_f(&wo, &u, BSDF_ALL).unwrap();
    assert_eq!(t, BSDF_REFLECTION | BSDF_DIFFUSE);
    assert!(wi.z > 0.0);
    assert_eq!(bsdf.entries()[0].bxdf.to_string(), format!("{:?}", t));
}
