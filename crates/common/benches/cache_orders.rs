// -------------------------------------------------------------------------------------------------
//  Copyright (C) 2025 Matchbook Systems. All rights reserved.
//
//  Licensed under the GNU Lesser General Public License Version 3.0 (the "License");
//  You may not use this file except in compliance with the License.
//  You may obtain a copy of the License at https://www.gnu.org/licenses/lgpl-3.0.en.html
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
// -------------------------------------------------------------------------------------------------

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use matchbook_common::cache::OrderCache;
use matchbook_model::{
    identifiers::{SecurityId, UserId},
    orders::Order,
    stubs::create_order_list_sample,
};

fn cache_orders_processing(orders: &[Order]) {
    let mut cache = OrderCache::default();
    for order in orders {
        cache.add_order(*order);
    }
}

fn bench_order_indexing(c: &mut Criterion) {
    // Create 100k orders list and add it to the cache
    let all_orders = create_order_list_sample(5, 100, 200);
    let mut cache = OrderCache::default();
    for order in &all_orders {
        cache.add_order(*order);
    }

    c.bench_function(
        "Cache with 100k orders - query orders for specific user",
        |b| {
            b.iter(|| {
                let _ = black_box(&cache).orders_for_user(black_box(&UserId::from("USER-1")));
            });
        },
    );

    c.bench_function(
        "Cache with 100k orders - matching size for specific security",
        |b| {
            b.iter(|| {
                let _ = black_box(&cache)
                    .matching_size_for_security(black_box(&SecurityId::from("SEC-1")));
            });
        },
    );

    c.bench_function("Cache processing of 100k orders", |b| {
        b.iter(|| cache_orders_processing(black_box(&all_orders)));
    });
}

fn bench_order_cancellation(c: &mut Criterion) {
    let all_orders = create_order_list_sample(5, 100, 200);

    c.bench_function("Cache cancel all orders for one user", |b| {
        b.iter_batched(
            || {
                let mut cache = OrderCache::default();
                for order in &all_orders {
                    cache.add_order(*order);
                }
                cache
            },
            |mut cache| cache.cancel_orders_for_user(UserId::from("USER-1")),
            criterion::BatchSize::SmallInput,
        );
    });

    c.bench_function("Cache cancel orders for security above min qty", |b| {
        b.iter_batched(
            || {
                let mut cache = OrderCache::default();
                for order in &all_orders {
                    cache.add_order(*order);
                }
                cache
            },
            |mut cache| {
                cache.cancel_orders_for_security_with_min_qty(SecurityId::from("SEC-1"), 500);
            },
            criterion::BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_order_indexing, bench_order_cancellation);
criterion_main!(benches);
