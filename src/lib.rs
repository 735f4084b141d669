// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//    http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
/// The typed error surface shared by every stage of the pipeline.
pub mod error;
/// Translation of a normalized token stream into instructions,
/// including loop classification and bracket linking.
pub mod compiler;
/// Direct threaded-switch execution of a compiled instruction vector.
pub mod exec;
/// The flat instruction representation produced by the compiler and
/// consumed by the executor.
pub mod instruction;
/// Source-level peephole normalization: comment stripping, run
/// coalescing, and dead-loop elimination.
pub mod normalize;
/// The fixed-size, wrap-around byte tape.
pub mod tape;
