// Backpropagation behaviour of `Trainer`.

use approx::assert_abs_diff_eq;
use logic_nn::{Lcg, MseLoss, Network, Trainer};

fn lcg_trainer(n_in: usize, n_hid: usize, n_out: usize) -> Trainer {
    let mut lcg = Lcg::new();
    Trainer::new(n_in, n_hid, n_out, || lcg.next_float())
}

#[test]
fn biases_are_exactly_zero_before_training() {
    let trainer = lcg_trainer(2, 2, 6);
    assert!(trainer.network().biases_hidden().iter().all(|&b| b == 0.0));
    assert!(trainer.network().biases_output().iter().all(|&b| b == 0.0));
}

#[test]
fn shapes_survive_training() {
    let mut trainer = lcg_trainer(3, 4, 2);
    for i in 0..100 {
        let x = (i % 2) as f64;
        trainer.train(&[x, 1.0 - x, 0.5], &[x, 1.0 - x], 0.5);
    }
    let net = trainer.network();
    assert_eq!(net.weights_hidden().len(), 12);
    assert_eq!(net.biases_hidden().len(), 4);
    assert_eq!(net.weights_output().len(), 8);
    assert_eq!(net.biases_output().len(), 2);
    assert_eq!(trainer.grad_hidden().len(), 4);
    assert_eq!(trainer.grad_output().len(), 2);
}

#[test]
fn training_is_deterministic() {
    let mut a = lcg_trainer(2, 3, 2);
    let mut b = lcg_trainer(2, 3, 2);
    for _ in 0..250 {
        a.train(&[1.0, 0.0], &[0.0, 1.0], 0.8);
        b.train(&[1.0, 0.0], &[0.0, 1.0], 0.8);
    }
    assert_eq!(a.network(), b.network());
}

#[test]
fn repeated_steps_reduce_error_on_one_example() {
    let mut trainer = lcg_trainer(2, 2, 3);
    let input = [1.0, 0.0];
    let target = [1.0, 0.0, 1.0];
    let before = MseLoss::loss(&trainer.network().predict(&input), &target);

    for _ in 0..1000 {
        trainer.train(&input, &target, 0.5);
    }

    let after = MseLoss::loss(&trainer.network().predict(&input), &target);
    assert!(after < before, "loss went from {} to {}", before, after);
    assert!(after < 0.01);
}

// Central-difference check of the gradient the trainer applies to each
// parameter, for the loss ½‖y − t‖².
#[test]
fn weight_updates_follow_numeric_gradient() {
    let base = lcg_trainer(2, 3, 2).into_network();
    let input = [0.3, -0.7];
    let target = [1.0, 0.0];
    let lr = 1e-3;

    let half_sse = |net: &Network| -> f64 {
        net.predict(&input)
            .iter()
            .zip(target.iter())
            .map(|(y, t)| 0.5 * (y - t) * (y - t))
            .sum()
    };

    let mut trainer = Trainer::from_network(base.clone());
    trainer.train(&input, &target, lr);
    let stepped = trainer.network();

    let params = |net: &Network| -> Vec<f64> {
        [
            net.weights_hidden(),
            net.biases_hidden(),
            net.weights_output(),
            net.biases_output(),
        ]
        .concat()
    };
    let before = params(&base);
    let after = params(stepped);

    let h = 1e-6;
    for k in 0..before.len() {
        let mut plus = before.clone();
        let mut minus = before.clone();
        plus[k] += h;
        minus[k] -= h;
        let numeric = (half_sse(&rebuild(&base, &plus)) - half_sse(&rebuild(&base, &minus))) / (2.0 * h);
        let applied = (before[k] - after[k]) / lr;
        assert_abs_diff_eq!(applied, numeric, epsilon = 1e-6);
    }
}

fn rebuild(shape: &Network, params: &[f64]) -> Network {
    let (i, h, o) = (shape.input_count(), shape.hidden_count(), shape.output_count());
    let (wh, rest) = params.split_at(i * h);
    let (bh, rest) = rest.split_at(h);
    let (wo, bo) = rest.split_at(h * o);
    Network::from_parts(i, h, o, wh.to_vec(), bh.to_vec(), wo.to_vec(), bo.to_vec()).unwrap()
}

#[test]
fn non_finite_input_propagates_silently() {
    let mut trainer = lcg_trainer(2, 2, 1);
    trainer.train(&[f64::NAN, 0.0], &[1.0], 1.0);
    assert!(trainer.network().weights_hidden().iter().any(|w| w.is_nan()));
}
