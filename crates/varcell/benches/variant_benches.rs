// Copyright (C) 2025 Ryan Daum <ryan.daum@gmail.com> This program is free
// software: you can redistribute it and/or modify it under the terms of the GNU
// General Public License as published by the Free Software Foundation, version
// 3.
//
// This program is distributed in the hope that it will be useful, but WITHOUT
// ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
// FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along with
// this program. If not, see <https://www.gnu.org/licenses/>.
//

//! Microbenchmarks for the variant hot paths: assignment cycling across
//! alternatives, same-type assignment, visitation and clone/equality.

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use varcell::{Variant, Visit};

type Scalar = varcell::alts![i64, f64, String];

struct Widen;
impl Visit<i64> for Widen {
    type Output = f64;
    fn visit(self, value: &i64) -> f64 {
        *value as f64
    }
}
impl Visit<f64> for Widen {
    type Output = f64;
    fn visit(self, value: &f64) -> f64 {
        *value
    }
}
impl Visit<String> for Widen {
    type Output = f64;
    fn visit(self, value: &String) -> f64 {
        value.len() as f64
    }
}

fn assignment(c: &mut Criterion) {
    let mut group = c.benchmark_group("assignment");

    group.bench_function("same_type", |b| {
        let mut v: Variant<Scalar> = Variant::new(0i64);
        b.iter(|| v.set(black_box(7i64)));
    });

    group.bench_function("cross_type_cycle", |b| {
        let mut v: Variant<Scalar> = Variant::new(0i64);
        b.iter(|| {
            v.set(black_box(1i64));
            v.set(black_box(2.5f64));
            v.set(black_box(String::from("moop")));
        });
    });

    group.finish();
}

fn visitation(c: &mut Criterion) {
    let mut group = c.benchmark_group("visitation");

    group.bench_function("first_alternative", |b| {
        let v: Variant<Scalar> = Variant::new(3i64);
        b.iter(|| {
            let r: f64 = v.visit(Widen).unwrap();
            black_box(r)
        });
    });

    group.bench_function("last_alternative", |b| {
        let v: Variant<Scalar> = Variant::new(String::from("scan to the end"));
        b.iter(|| {
            let r: f64 = v.visit(Widen).unwrap();
            black_box(r)
        });
    });

    group.finish();
}

fn clone_and_eq(c: &mut Criterion) {
    let mut group = c.benchmark_group("clone_eq");

    group.bench_function("clone_string", |b| {
        let v: Variant<Scalar> = Variant::new(String::from("clone me"));
        b.iter(|| black_box(v.clone()));
    });

    group.bench_function("try_eq_int", |b| {
        let v: Variant<Scalar> = Variant::new(42i64);
        let w: Variant<Scalar> = Variant::new(42i64);
        b.iter(|| black_box(v.try_eq(&w)));
    });

    group.finish();
}

criterion_group!(benches, assignment, visitation, clone_and_eq);
criterion_main!(benches);
