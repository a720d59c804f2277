//! Traversal-step overload table, transcribed from the TinkerPop
//! `GraphTraversal` javadoc. Ordering within an entry matters: the
//! resolver breaks score ties by table position.

use super::Kind::{
    Accessor, Any, Boolean, Cardinality, Comparator, Direction, Double, Function, Integer, Long,
    Pop, Predicate, Scope, String, Token, Traversal,
};
use super::{pd, pm, sig, Signature};

pub(super) static STEPS: &[(&str, &[Signature])] = &[
    (
        "addE",
        &[
            sig(
                "3.1.0-incubating",
                Some("the traversal with the AddEdgeStep added"),
                "Adds an Edge with the specified edge label.",
                &[pd(String, "edgeLabel", "the label of the newly added edge")],
            ),
            sig(
                "3.3.1",
                Some("the traversal with the AddEdgeStep added"),
                "Adds a Edge with an edge label determined by a Traversal.",
                &[pd(Traversal, "edgeLabelTraversal", "")],
            ),
        ],
    ),
    (
        "addV",
        &[
            sig(
                "3.1.0-incubating",
                Some("the traversal with the AddVertexStep added"),
                "Adds a Vertex with a default vertex label.",
                &[],
            ),
            sig(
                "3.1.0-incubating",
                Some("the traversal with the AddVertexStep added"),
                "Adds an Edge with the specified edge label.",
                &[pd(String, "vertexLabel", "the label of the Vertex to add")],
            ),
            sig(
                "3.3.1",
                Some("the traversal with the AddVertexStep added"),
                "Adds a Vertex with a vertex label determined by a Traversal.",
                &[pd(String, "vertexLabelTraversal", "")],
            ),
        ],
    ),
    (
        "aggregate",
        &[
            sig(
                "3.0.0-incubating",
                Some("the traversal with an appended AggregateStep"),
                "Eagerly collects objects up to this step into a side-effect. Same as calling aggregate(Scope, String) with a Scope.local.",
                &[pd(String, "sideEffectKey", "the name of the side-effect key that will hold the aggregated objects")],
            ),
            sig(
                "3.4.3",
                Some("the traversal with an appended AggregateStep"),
                "Collects objects in a list using the Scope argument to determine whether it should be lazy Scope.local or eager (Scope.global while gathering those objects.",
                &[
                    pd(Scope, "scope", ""),
                    pd(String, "sideEffectKey", "the name of the side-effect key that will hold the aggregated objects"),
                ],
            ),
        ],
    ),
    (
        "and",
        &[sig(
            "3.0.0-incubating",
            Some("the traversal with an appended AndStep"),
            "Ensures that all of the provided traversals yield a result.",
            &[pd(Traversal, "andTraversals", "filter traversals that must be satisfied")],
        )],
    ),
    (
        "as",
        &[
            sig(
                "3.0.0-incubating",
                Some("the traversal with the modified end step"),
                "A step modulator that provides a label to the step that can be accessed later in the traversal by other steps.",
                &[pd(String, "stepLabel", "the name of the step")],
            ),
            sig(
                "3.0.0-incubating",
                Some("the traversal with the modified end step"),
                "A step modulator that provides a label to the step that can be accessed later in the traversal by other steps.",
                &[
                    pd(String, "stepLabel", "the name of the step"),
                    pm(String, "stepLabels", "additional names for the label"),
                ],
            ),
        ],
    ),
    (
        "asAdmin",
        &[sig(
            "3.0.0-incubating",
            Some("the admin of this traversal"),
            "Get access to administrative methods of the traversal via its accompanying Traversal.Admin.",
            &[],
        )],
    ),
    (
        "barrier",
        &[
            sig(
                "3.0.0-incubating",
                Some("the traversal with an appended NoOpBarrierStep"),
                "Turns the lazy traversal pipeline into a bulk-synchronous pipeline which basically iterates that traversal to the size of the barrier. In this case, it iterates the entire thing as the default barrier size is set to Integer.MAX_VALUE.",
                &[],
            ),
            sig(
                "3.0.0-incubating",
                Some("the traversal with an appended NoOpBarrierStep"),
                "Turns the lazy traversal pipeline into a bulk-synchronous pipeline which basically iterates that traversal to the size of the barrier.",
                &[pd(Integer, "maxBarrierSize", "the size of the barrier")],
            ),
        ],
    ),
    (
        "both",
        &[
            sig(
                "3.0.0-incubating",
                Some("the traversal with an appended VertexStep."),
                "Map the Vertex to its adjacent vertices given the edge labels.",
                &[],
            ),
            sig(
                "3.0.0-incubating",
                Some("the traversal with an appended VertexStep."),
                "Map the Vertex to its adjacent vertices given the edge labels.",
                &[pm(String, "edgeLabels", "the edge labels to traverse")],
            ),
        ],
    ),
    (
        "bothE",
        &[
            sig(
                "3.0.0-incubating",
                Some("the traversal with an appended VertexStep."),
                "Map the Vertex to its incident edges given the edge labels.",
                &[],
            ),
            sig(
                "3.0.0-incubating",
                Some("the traversal with an appended VertexStep."),
                "Map the Vertex to its incident edges given the edge labels.",
                &[pm(String, "edgeLabels", "the edge labels to traverse")],
            ),
        ],
    ),
    (
        "bothV",
        &[sig(
            "3.0.0-incubating",
            Some("the traversal with an appended EdgeVertexStep."),
            "Map the Edge to its incident vertices.",
            &[],
        )],
    ),
    (
        "branch",
        &[
            sig(
                "3.0.0-incubating",
                Some("the Traversal with the BranchStep added"),
                "Split the Traverser to all the specified traversals.",
                &[],
            ),
            sig(
                "3.0.0-incubating",
                Some("the Traversal with the BranchStep added"),
                "Split the Traverser to all the specified traversals.",
                &[pd(Traversal, "branchTraversal", "the traversal to branch the Traverser to")],
            ),
        ],
    ),
    (
        "by",
        &[
            sig(
                "3.0.0-incubating",
                Some("the traversal with a modulated step."),
                "The by() can be applied to a number of different step to alter their behaviors. This form is essentially an identity() modulation.",
                &[],
            ),
            sig(
                "3.0.0-incubating",
                Some("the traversal with a modulated step."),
                "The by() can be applied to a number of different step to alter their behaviors. Modifies the previous step with the specified function.",
                &[pd(Comparator, "comparator", "the comparator to apply typically for some order()")],
            ),
            sig(
                "3.0.0-incubating",
                Some("the traversal with a modulated step."),
                "The by() can be applied to a number of different step to alter their behaviors. Modifies the previous step with the specified key.",
                &[pd(String, "key", "the key to apply")],
            ),
            sig(
                "3.0.0-incubating",
                Some("the traversal with a modulated step."),
                "The by() can be applied to a number of different step to alter their behaviors. Modifies the previous step with the specified function.",
                &[
                    pd(String, "key", "the key to apply traversal"),
                    pd(Comparator, "comparator", "the comparator to apply typically for some order()"),
                ],
            ),
            sig(
                "3.0.0-incubating",
                Some("the traversal with a modulated step."),
                "The by() can be applied to a number of different step to alter their behaviors. Modifies the previous step with the specified token of T.",
                &[pd(Token, "token", "the token to apply")],
            ),
            sig(
                "3.0.0-incubating",
                Some("the traversal with a modulated step."),
                "The by() can be applied to a number of different step to alter their behaviors. Modifies the previous step with the specified traversal.",
                &[pd(Traversal, "traversal", "the traversal to apply")],
            ),
            sig(
                "3.0.0-incubating",
                Some("the traversal with a modulated step."),
                "The by() can be applied to a number of different step to alter their behaviors. Modifies the previous step with the specified function.",
                &[
                    pd(Traversal, "traversal", "the traversal to apply"),
                    pd(Comparator, "comparator", "the comparator to apply typically for some order()"),
                ],
            ),
        ],
    ),
    (
        "cap",
        &[
            sig(
                "3.0.0-incubating",
                Some("the traversal with an appended SideEffectCapStep"),
                "Iterates the traversal up to the itself and emits the side-effect referenced by the key. If multiple keys are supplied then the side-effects are emitted as a Map.",
                &[pd(String, "sideEffectKey", "the side-effect to emit")],
            ),
            sig(
                "3.0.0-incubating",
                Some("the traversal with an appended SideEffectCapStep"),
                "Iterates the traversal up to the itself and emits the side-effect referenced by the key. If multiple keys are supplied then the side-effects are emitted as a Map.",
                &[
                    pd(String, "sideEffectKey", "the side-effect to emit"),
                    pm(String, "sideEffectKeys", "other side-effects to emit"),
                ],
            ),
        ],
    ),
    (
        "choose",
        &[
            sig(
                "3.2.4",
                Some("the traversal with the appended ChooseStep"),
                "Routes the current traverser to a particular traversal branch option which allows the creation of if-then like semantics within a traversal.",
                &[
                    pd(Predicate, "choosePredicate", "the function used to determine the \"if\" portion of the if-then-else"),
                    pd(Traversal, "trueChoice", "the traversal to execute in the event the traversalPredicate returns true"),
                ],
            ),
            sig(
                "3.0.0-incubating",
                Some("the traversal with the appended ChooseStep"),
                "Routes the current traverser to a particular traversal branch option which allows the creation of if-then-else like semantics within a traversal.",
                &[
                    pd(Predicate, "choosePredicate", "the function used to determine the \"if\" portion of the if-then-else"),
                    pd(Traversal, "trueChoice", "the traversal to execute in the event the traversalPredicate returns true"),
                    pd(Traversal, "falseChoice", "the traversal to execute in the event the traversalPredicate returns false"),
                ],
            ),
            sig(
                "3.2.4",
                Some("the traversal with the appended ChooseStep"),
                "Routes the current traverser to a particular traversal branch option which allows the creation of if-then like semantics within a traversal.",
                &[
                    pd(Traversal, "traversalPredicate", "the traversal used to determine the \"if\" portion of the if-then-else"),
                    pd(Traversal, "trueChoice", "the traversal to execute in the event the traversalPredicate returns true"),
                ],
            ),
            sig(
                "3.0.0-incubating",
                Some("the traversal with the appended ChooseStep"),
                "Routes the current traverser to a particular traversal branch option which allows the creation of if-then-else like semantics within a traversal.",
                &[
                    pd(Traversal, "traversalPredicate", "the traversal used to determine the \"if\" portion of the if-then-else"),
                    pd(Traversal, "trueChoice", "the traversal to execute in the event the traversalPredicate returns true"),
                    pd(Traversal, "falseChoice", "the traversal to execute in the event the traversalPredicate returns false"),
                ],
            ),
            sig(
                "3.0.0-incubating",
                Some("the traversal with the appended ChooseStep"),
                "Routes the current traverser to a particular traversal branch option which allows the creation of if-then-else like semantics within a traversal. A choose is modified by option(M, org.apache.tinkerpop.gremlin.process.traversal.Traversal<?, E2>) which provides the various branch choices.",
                &[pd(Traversal, "choiceTraversal", "the traversal used to determine the value for the branch")],
            ),
        ],
    ),
    (
        "coalesce",
        &[
            sig(
                "3.0.0-incubating",
                Some("the traversal with the appended CoalesceStep"),
                "Evaluates the provided traversals and returns the result of the first traversal to emit at least one object.",
                &[],
            ),
            sig(
                "3.0.0-incubating",
                Some("the traversal with the appended CoalesceStep"),
                "Evaluates the provided traversals and returns the result of the first traversal to emit at least one object.",
                &[pm(Traversal, "coalesceTraversals", "the traversals to coalesce")],
            ),
        ],
    ),
    (
        "coin",
        &[sig(
            "3.0.0-incubating",
            Some("the traversal with an appended CoinStep."),
            "Filter the E object given a biased coin toss.",
            &[pd(Double, "probability", "the probability that the object will pass through")],
        )],
    ),
    (
        "connectedComponent",
        &[sig(
            "3.4.0",
            Some("the traversal with the appended ConnectedComponentVertexProgram"),
            "Executes a Connected Component algorithm over the graph.",
            &[],
        )],
    ),
    (
        "constant",
        &[sig(
            "3.0.0-incubating",
            Some("the traversal with an appended ConstantStep."),
            "Map any object to a fixed E value.",
            &[pd(Any, "value", "Any object to be used as the value")],
        )],
    ),
    (
        "count",
        &[sig(
            "3.0.0-incubating",
            Some("the traversal with an appended CountGlobalStep."),
            "Map the traversal stream to its reduction as a sum of the Traverser.bulk() values (i.e. count the number of traversers up to this point).",
            &[],
        )],
    ),
    (
        "cyclicPath",
        &[sig(
            "3.0.0-incubating",
            Some("the traversal with an appended PathFilterStep."),
            "Filter the E object if its Traverser.path() is Path.isSimple().",
            &[],
        )],
    ),
    (
        "dedup",
        &[
            sig(
                "3.0.0-incubating",
                Some("the traversal with an appended DedupGlobalStep."),
                "Remove all duplicates in the traversal stream up to this point.",
                &[],
            ),
            sig(
                "3.0.0-incubating",
                Some("the traversal with an appended DedupGlobalStep."),
                "Remove all duplicates in the traversal stream up to this point.",
                &[pm(String, "dedupLabels", "if labels are provided, then the scoped object's labels determine de-duplication. No labels implies current object.")],
            ),
            sig(
                "3.0.0-incubating",
                Some("the traversal with an appended DedupGlobalStep or DedupLocalStep depending on scope."),
                "Remove all duplicates in the traversal stream up to this point.",
                &[pd(Scope, "scope", "whether the deduplication is on the stream (global) or the current object (local).")],
            ),
            sig(
                "3.0.0-incubating",
                Some("the traversal with an appended DedupGlobalStep or DedupLocalStep depending on scope."),
                "Remove all duplicates in the traversal stream up to this point.",
                &[
                    pd(Scope, "scope", "whether the deduplication is on the stream (global) or the current object (local)."),
                    pm(String, "dedupLabels", "if labels are provided, then the scope labels determine de-duplication. No labels implies current object."),
                ],
            ),
        ],
    ),
    (
        "drop",
        &[sig(
            "3.0.0-incubating",
            Some("the traversal with the DropStep added"),
            "Removes elements and properties from the graph. This step is not a terminating, in the sense that it does not automatically iterate the traversal. It is therefore necessary to do some form of iteration for the removal to actually take place. In most cases, iteration is best accomplished with g.V().drop().iterate().",
            &[],
        )],
    ),
    (
        "elementMap",
        &[
            sig(
                "3.4.4",
                Some("the traversal with an appended ElementMapStep."),
                "Map the Element to a Map of the property values key'd according to their Property.key(). If no property keys are provided, then all property values are retrieved. For vertices, the Map will be returned with the assumption of single property values along with T.id and T.label. Prefer valueMap(String...) if multi-property processing is required. For edges, keys will include additional related edge structure of Direction.IN and Direction.OUT which themselves are Map instances of the particular Vertex represented by T.id and T.label.",
                &[],
            ),
            sig(
                "3.4.4",
                Some("the traversal with an appended ElementMapStep."),
                "Map the Element to a Map of the property values key'd according to their Property.key(). If no property keys are provided, then all property values are retrieved. For vertices, the Map will be returned with the assumption of single property values along with T.id and T.label. Prefer valueMap(String...) if multi-property processing is required. For edges, keys will include additional related edge structure of Direction.IN and Direction.OUT which themselves are Map instances of the particular Vertex represented by T.id and T.label.",
                &[pm(String, "propertyKeys", "the properties to retrieve")],
            ),
        ],
    ),
    (
        "emit",
        &[
            sig(
                "3.0.0-incubating",
                Some("the traversal with the appended RepeatStep"),
                "Emit is used in conjunction with repeat(Traversal) to emit all objects from the loop.",
                &[],
            ),
            sig(
                "3.0.0-incubating",
                Some("the traversal with the appended RepeatStep"),
                "Emit is used in conjunction with repeat(Traversal) to determine what objects get emit from the loop.",
                &[pd(Predicate, "emitPredicate", "the emit predicate")],
            ),
            sig(
                "3.0.0-incubating",
                Some("the traversal with the appended RepeatStep"),
                "Emit is used in conjunction with repeat(Traversal) to determine what objects get emit from the loop.",
                &[pd(Traversal, "emitTraversal", "the emit predicate defined as a traversal")],
            ),
        ],
    ),
    (
        "filter",
        &[
            sig(
                "3.0.0-incubating",
                Some("the traversal with the LambdaFilterStep added"),
                "Map the Traverser to either true or false, where false will not pass the traverser to the next step.",
                &[pd(Predicate, "predicate", "the filter function to apply")],
            ),
            sig(
                "3.0.0-incubating",
                Some("the traversal with the TraversalFilterStep added"),
                "Map the Traverser to either true or false, where false will not pass the traverser to the next step.",
                &[pd(Traversal, "filterTraversal", "the filter traversal to apply")],
            ),
        ],
    ),
    (
        "flatMap",
        &[sig(
            "3.0.0-incubating",
            Some("the traversal with an appended TraversalFlatMapStep."),
            "Map a Traverser referencing an object of type E to an iterator of objects of type E2. The internal traversal is drained one-by-one before a new E object is pulled in for processing.",
            &[pd(Traversal, "flatMapTraversal", "the traversal generating objects of type E2")],
        )],
    ),
    (
        "fold",
        &[
            sig(
                "3.0.0-incubating",
                Some("the traversal with an appended FoldStep"),
                "Rolls up objects in the stream into an aggregate list.",
                &[],
            ),
            sig(
                "3.0.0-incubating",
                Some("the traversal with an appended FoldStep"),
                "Rolls up objects in the stream into an aggregate value as defined by a seed and BiFunction.",
                &[
                    pd(Any, "seed", "the value to provide as the first argument to the foldFunction"),
                    pd(Any, "foldFunction", "the function to fold by where the first argument is the seed or the value returned from subsequent calss and the second argument is the value from the stream"),
                ],
            ),
        ],
    ),
    (
        "from",
        &[
            sig(
                "3.1.0-incubating",
                Some("the traversal with the modified FromToModulating step."),
                "Provide from()-modulation to respective steps.",
                &[pd(String, "fromStepLabel", "the step label to modulate to.")],
            ),
            sig(
                "3.1.0-incubating",
                Some("the traversal with the modified AddEdgeStep."),
                "When used as a modifier to addE(String) this method specifies the traversal to use for selecting the outgoing vertex of the newly added Edge.",
                &[pd(Traversal, "fromVertex", "the traversal for selecting the outgoing vertex")],
            ),
        ],
    ),
    (
        "group",
        &[
            sig(
                "3.1.0-incubating",
                Some("the traversal with an appended GroupStep."),
                "Organize objects in the stream into a Map. Calls to group() are typically accompanied with by() modulators which help specify how the grouping should occur.",
                &[],
            ),
            sig(
                "3.0.0-incubating",
                Some("the traversal with an appended GroupStep."),
                "Organize objects in the stream into a Map. Calls to group() are typically accompanied with by() modulators which help specify how the grouping should occur.",
                &[pd(String, "sideEffectKey", "the name of the side-effect key that will hold the aggregated grouping")],
            ),
        ],
    ),
    (
        "groupCount",
        &[
            sig(
                "3.0.0-incubating",
                Some("the traversal with an appended GroupCountStep."),
                "Counts the number of times a particular objects has been part of a traversal, returning a Map where the object is the key and the value is the count.",
                &[],
            ),
            sig(
                "3.0.0-incubating",
                Some("the traversal with an appended GroupCountStep."),
                "Counts the number of times a particular objects has been part of a traversal, returning a Map where the object is the key and the value is the count.",
                &[pd(String, "sideEffectKey", "the name of the side-effect key that will hold the aggregated grouping")],
            ),
        ],
    ),
    (
        "has",
        &[
            sig(
                "3.0.0-incubating",
                Some("the traversal with an appended HasStep."),
                "Filters vertices, edges and vertex properties based on the existence of properties.",
                &[pd(String, "propertyKey", "the key of the property to filter on for existence")],
            ),
            sig(
                "3.0.0-incubating",
                Some("the traversal with an appended HasStep."),
                "Filters vertices, edges and vertex properties based on their properties.",
                &[
                    pd(String, "propertyKey", "the key of the property to filter on"),
                    pd(Any, "value", "the value to compare the property value to for equality"),
                ],
            ),
            sig(
                "3.0.0-incubating",
                Some("the traversal with an appended HasStep."),
                "Filters vertices, edges and vertex properties based on their properties.",
                &[
                    pd(String, "propertyKey", "the key of the property to filter on"),
                    pd(Predicate, "predicate", "the filter to apply to the key's value"),
                ],
            ),
            sig(
                "3.0.0-incubating",
                Some("the traversal with an appended HasStep."),
                "Filters vertices, edges and vertex properties based on their properties.",
                &[
                    pd(String, "label", "the label of the Element"),
                    pd(String, "propertyKey", "the key of the property to filter on"),
                    pd(Any, "value", "the value to compare the accessor value to for equality"),
                ],
            ),
            sig(
                "3.0.0-incubating",
                Some("the traversal with an appended HasStep."),
                "Filters vertices, edges and vertex properties based on their properties.",
                &[
                    pd(String, "label", "the label of the Element"),
                    pd(String, "propertyKey", "the key of the property to filter on"),
                    pd(Predicate, "predicate", "the filter to apply to the key's value"),
                ],
            ),
            sig(
                "3.0.0-incubating",
                Some("the traversal with an appended HasStep."),
                "Filters vertices, edges and vertex properties based on the value of the specified property key.",
                &[
                    pd(String, "propertyKey", "the key of the property to filter on"),
                    pd(Traversal, "propertyTraversal", "the traversal to filter the property value by"),
                ],
            ),
            sig(
                "3.0.0-incubating",
                Some("the traversal with an appended HasStep."),
                "Filters vertices, edges and vertex properties based on their properties.",
                &[
                    pd(Accessor, "accessor", "the T accessor of the property to filter on"),
                    pd(Any, "value", "the value to compare the accessor value to for equality"),
                ],
            ),
            sig(
                "3.0.0-incubating",
                Some("the traversal with an appended HasStep."),
                "Filters vertices, edges and vertex properties based on their properties.",
                &[
                    pd(Accessor, "accessor", "the T accessor of the property to filter on"),
                    pd(Predicate, "predicate", "the filter to apply to the key's value"),
                ],
            ),
            sig(
                "3.1.0-incubating",
                Some("the traversal with an appended HasStep."),
                "Filters vertices, edges and vertex properties based on their value of T where only T.id and T.label are supported.",
                &[
                    pd(Accessor, "accessor", "the T accessor of the property to filter on"),
                    pd(Traversal, "propertyTraversal", "the traversal to filter the accessor value by"),
                ],
            ),
        ],
    ),
    (
        "hasId",
        &[
            sig(
                "3.2.2",
                Some("the traversal with an appended HasStep."),
                "Filters vertices, edges and vertex properties based on their identifier.",
                &[
                    pd(Any, "id", "the identifier of the Element"),
                    pm(Any, "otherIds", "additional identifiers of the Element"),
                ],
            ),
            sig(
                "3.2.4",
                Some("the traversal with an appended HasStep."),
                "Filters vertices, edges and vertex properties based on their identifier.",
                &[pd(Predicate, "predicate", "the filter to apply to the identifier of the Element")],
            ),
        ],
    ),
    (
        "hasKey",
        &[
            sig(
                "3.2.4",
                Some("the traversal with an appended HasStep."),
                "Filters vertices, edges and vertex properties based on their key.",
                &[pd(Predicate, "predicate", "the filter to apply to the key of the Element")],
            ),
            sig(
                "3.2.2",
                Some("the traversal with an appended HasStep."),
                "Filters vertices, edges and vertex properties based on their key.",
                &[pd(String, "label", "the key of the Element")],
            ),
            sig(
                "3.2.2",
                Some("the traversal with an appended HasStep."),
                "Filters vertices, edges and vertex properties based on their key.",
                &[
                    pd(String, "label", "the key of the Element"),
                    pm(String, "otherLabels", "additional key of the Element"),
                ],
            ),
        ],
    ),
    (
        "hasLabel",
        &[
            sig(
                "3.2.4",
                Some("the traversal with an appended HasStep."),
                "Filters vertices, edges and vertex properties based on their label.",
                &[pd(Predicate, "predicate", "the filter to apply to the label of the Element")],
            ),
            sig(
                "3.2.2",
                Some("the traversal with an appended HasStep."),
                "Filters vertices, edges and vertex properties based on their label.",
                &[pd(String, "label", "the label of the Element")],
            ),
            sig(
                "3.2.2",
                Some("the traversal with an appended HasStep."),
                "Filters vertices, edges and vertex properties based on their label.",
                &[
                    pd(String, "label", "the label of the Element"),
                    pm(String, "otherLabels", "additional labels of the Element"),
                ],
            ),
        ],
    ),
    (
        "hasNot",
        &[sig(
            "3.0.0-incubating",
            Some("the traversal with an appended HasStep."),
            "Filters vertices, edges and vertex properties based on the non-existence of properties.",
            &[pd(String, "propertyKey", "the key of the property to filter on for existence")],
        )],
    ),
    (
        "hasValue",
        &[
            sig(
                "3.0.0-incubating",
                Some("the traversal with an appended HasStep."),
                "Filters vertices, edges and vertex properties based on their value.",
                &[pd(Any, "value", "the value of the Element")],
            ),
            sig(
                "3.0.0-incubating",
                Some("the traversal with an appended HasStep."),
                "Filters vertices, edges and vertex properties based on their value.",
                &[
                    pd(Any, "value", "the value of the Element"),
                    pm(Any, "otherValues", "additional values of the Element"),
                ],
            ),
            sig(
                "3.2.4",
                Some("the traversal with an appended HasStep."),
                "Filters vertices, edges and vertex properties based on their value.",
                &[pd(Predicate, "predicate", "the filter to apply to the value of the Element")],
            ),
        ],
    ),
    (
        "id",
        &[sig(
            "3.0.0-incubating",
            Some("the traversal with an appended IdStep."),
            "Map the Element to its Element.id().",
            &[],
        )],
    ),
    (
        "identity",
        &[sig(
            "3.0.0-incubating",
            Some("the traversal with an appended IdentityStep."),
            "Map the E object to itself. In other words, a \"no op.\"",
            &[],
        )],
    ),
    (
        "in",
        &[sig(
            "3.0.0-incubating",
            Some("the traversal with an appended VertexStep."),
            "Map the Vertex to its incoming adjacent vertices given the edge labels.",
            &[pm(String, "edgeLabels", "the edge labels to traverse")],
        )],
    ),
    (
        "index",
        &[sig(
            "3.4.0",
            Some("the traversal with an appended IndexStep."),
            "Indexes all items of the current collection. The indexing format can be configured using the with(String, Object) and WithOptions.indexer. Indexed as list: [\"a\",\"b\",\"c\"] => [[\"a\",0],[\"b\",1],[\"c\",2]] Indexed as map: [\"a\",\"b\",\"c\"] => {0:\"a\",1:\"b\",2:\"c\"} If the current object is not a collection, this step will map the object to a single item collection/map: Indexed as list: \"a\" => [\"a\",0] Indexed as map: \"a\" => {0:\"a\"}",
            &[],
        )],
    ),
    (
        "inE",
        &[sig(
            "3.0.0-incubating",
            Some("the traversal with an appended VertexStep."),
            "Map the Vertex to its incoming incident edges given the edge labels.",
            &[pm(String, "edgeLabels", "the edge labels to traverse")],
        )],
    ),
    (
        "inject",
        &[sig(
            "3.0.0-incubating",
            Some("the traversal with an appended InjectStep."),
            "Provides a way to add arbitrary objects to a traversal stream.",
            &[pm(Any, "injections", "the objects to add to the stream")],
        )],
    ),
    (
        "inV",
        &[sig(
            "3.0.0-incubating",
            Some("the traversal with an appended EdgeVertexStep."),
            "Map the Edge to its incoming/head incident Vertex.",
            &[],
        )],
    ),
    (
        "is",
        &[
            sig(
                "3.0.0-incubating",
                Some("the traversal with an appended IsStep."),
                "Filter the E object if it is not P.eq(V) to the provided value.",
                &[pd(Any, "value", "the value that the object must equal.")],
            ),
            sig(
                "3.0.0-incubating",
                Some("the traversal with an appended IsStep."),
                "Filters E object values given the provided predicate.",
                &[pd(Predicate, "predicate", "the filter to apply")],
            ),
        ],
    ),
    (
        "iterate",
        &[sig(
            "3.0.0-incubating",
            Some("the fully drained traversal."),
            "Iterates the traversal presumably for the generation of side-effects.",
            &[],
        )],
    ),
    (
        "key",
        &[sig(
            "3.0.0-incubating",
            Some("the traversal with an appended PropertyKeyStep."),
            "Map the Property to its Property.key().",
            &[],
        )],
    ),
    (
        "label",
        &[sig(
            "3.0.0-incubating",
            Some("the traversal with an appended LabelStep."),
            "Map the Element to its Element.label().",
            &[],
        )],
    ),
    (
        "limit",
        &[
            sig(
                "3.0.0-incubating",
                Some("the traversal with an appended RangeGlobalStep."),
                "Filter the objects in the traversal by the number of them to pass through the stream, where only the first n objects are allowed as defined by the limit argument.",
                &[pd(Long, "limit", "the number at which to end the stream")],
            ),
            sig(
                "3.0.0-incubating",
                Some("the traversal with an appended RangeGlobalStep or RangeLocalStep depending on scope."),
                "Filter the objects in the traversal by the number of them to pass through the stream given the Scope, where only the first n objects are allowed as defined by the limit argument.",
                &[
                    pd(Scope, "scope", "the scope of how to apply the limit"),
                    pd(Long, "limit", "the number at which to end the stream"),
                ],
            ),
        ],
    ),
    (
        "local",
        &[sig(
            "3.0.0-incubating",
            Some("the traversal with the appended LocalStep."),
            "Provides a execute a specified traversal on a single element within a stream.",
            &[pd(Traversal, "localTraversal", "the traversal to execute locally")],
        )],
    ),
    (
        "loops",
        &[
            sig(
                "3.1.0-incubating",
                Some("the traversal with an appended LoopsStep."),
                "If the Traverser supports looping then calling this method will extract the number of loops for that traverser.",
                &[],
            ),
            sig(
                "3.4.0",
                Some("the traversal with an appended LoopsStep."),
                "If the Traverser supports looping then calling this method will extract the number of loops for that traverser for the named loop.",
                &[pd(String, "loopName", "the loop name")],
            ),
        ],
    ),
    (
        "map",
        &[
            sig(
                "3.0.0-incubating",
                Some("the traversal with an appended LambdaMapStep."),
                "Map a Traverser referencing an object of type E to an object of type E2.",
                &[pd(Function, "function", "the lambda expression that does the functional mapping")],
            ),
            sig(
                "3.0.0-incubating",
                Some("the traversal with an appended LambdaMapStep."),
                "Map a Traverser referencing an object of type E to an object of type E2.",
                &[pd(Traversal, "mapTraversal", "the traversal expression that does the functional mapping")],
            ),
        ],
    ),
    (
        "match",
        &[sig(
            "3.0.0-incubating",
            Some("the traversal with an appended MatchStep."),
            "Map the Traverser to a Map of bindings as specified by the provided match traversals.",
            &[pm(Traversal, "matchTraversals", "the traversal that maintain variables which must hold for the life of the traverser")],
        )],
    ),
    (
        "math",
        &[sig(
            "3.3.1",
            Some("the traversal with the MathStep added."),
            "Map the Traverser to a Double according to the mathematical expression provided in the argument.",
            &[pd(String, "expression", "the mathematical expression with variables refering to scope variables.")],
        )],
    ),
    (
        "max",
        &[
            sig(
                "3.0.0-incubating",
                Some("the traversal with an appended MaxGlobalStep."),
                "Determines the largest value in the stream.",
                &[],
            ),
            sig(
                "3.0.0-incubating",
                Some("the traversal with an appended MaxGlobalStep or MaxLocalStep depending on the Scope."),
                "Determines the largest value in the stream given the Scope.",
                &[pd(Scope, "scope", "the scope of how to apply max")],
            ),
        ],
    ),
    (
        "mean",
        &[
            sig(
                "3.0.0-incubating",
                Some("the traversal with an appended MeanGlobalStep."),
                "Determines the mean value in the stream.",
                &[],
            ),
            sig(
                "3.0.0-incubating",
                Some("the traversal with an appended MeanGlobalStep or MeanLocalStep depending on the Scope."),
                "Determines the mean value in the stream given the Scope.",
                &[pd(Scope, "scope", "the scope of how to apply mean")],
            ),
        ],
    ),
    (
        "min",
        &[
            sig(
                "3.0.0-incubating",
                Some("the traversal with an appended MinGlobalStep."),
                "Determines the smallest value in the stream.",
                &[],
            ),
            sig(
                "3.0.0-incubating",
                Some("the traversal with an appended MinGlobalStep or MinLocalStep depending on the Scope."),
                "Determines the smallest value in the stream given the Scope.",
                &[pd(Scope, "scope", "the scope of how to apply min")],
            ),
        ],
    ),
    (
        "none",
        &[sig(
            "3.0.0-incubating",
            Some("the updated traversal with respective NoneStep."),
            "Filter all traversers in the traversal. This step has narrow use cases and is primarily intended for use as a signal to remote servers that iterate() was called. While it may be directly used, it is often a sign that a traversal should be re-written in another form.",
            &[],
        )],
    ),
    (
        "not",
        &[sig(
            "3.0.0-incubating",
            Some("the traversal with an appended NotStep."),
            "Removes objects from the traversal stream when the traversal provided as an argument does not return any objects.",
            &[pd(Traversal, "notTraversal", "the traversal to filter by.")],
        )],
    ),
    (
        "option",
        &[
            sig(
                "3.0.0-incubating",
                Some("the traversal with the modulated step."),
                "This step modifies choose(Function) to specifies the available choices that might be executed.",
                &[
                    pd(Any, "pickToken", "the token that would trigger this option"),
                    pd(Traversal, "traversalOption", "the option as a traversal"),
                ],
            ),
            sig(
                "3.0.0-incubating",
                Some("the traversal with the modulated step"),
                "This step modifies choose(Function) to specifies the available choices that might be executed.",
                &[pd(Traversal, "traversalOption", "the option as a traversal")],
            ),
        ],
    ),
    (
        "optional",
        &[
            sig(
                "3.0.0-incubating",
                Some("the traversal with the appended ChooseStep"),
                "Returns the result of the specified traversal if it yields a result, otherwise it returns the calling element.",
                &[],
            ),
            sig(
                "3.0.0-incubating",
                Some("the traversal with the appended ChooseStep"),
                "Returns the result of the specified traversal if it yields a result, otherwise it returns the calling element.",
                &[pd(String, "optionalTraversal", "the traversal to execute for a potential result")],
            ),
        ],
    ),
    (
        "or",
        &[
            sig(
                "3.0.0-incubating",
                Some("the traversal with an appended OrStep."),
                "Ensures that at least one of the provided traversals yield a result.",
                &[],
            ),
            sig(
                "3.0.0-incubating",
                Some("the traversal with an appended OrStep."),
                "Ensures that at least one of the provided traversals yield a result.",
                &[pm(Traversal, "orTraversals", "filter traversals where at least one must be satisfied")],
            ),
        ],
    ),
    (
        "order",
        &[
            sig(
                "3.0.0-incubating",
                Some("the traversal with an appended OrderGlobalStep."),
                "Order all the objects in the traversal up to this point and then emit them one-by-one in their ordered sequence.",
                &[],
            ),
            sig(
                "3.0.0-incubating",
                Some("the traversal with an appended OrderGlobalStep or OrderLocalStep depending on the scope."),
                "Order either the Scope.local object (e.g. a list, map, etc.) or the entire Scope.global traversal stream.",
                &[pd(Scope, "scope", "whether the ordering is the current local object or the entire global stream.")],
            ),
        ],
    ),
    (
        "otherV",
        &[sig(
            "3.0.0-incubating",
            Some("the traversal with an appended EdgeOtherVertexStep."),
            "Map the Edge to the incident vertex that was not just traversed from in the path history.",
            &[],
        )],
    ),
    (
        "out",
        &[sig(
            "3.0.0-incubating",
            Some("the traversal with an appended VertexStep."),
            "Map the Vertex to its outgoing adjacent vertices given the edge labels.",
            &[pm(String, "edgeLabels", "the edge labels to traverse")],
        )],
    ),
    (
        "outE",
        &[sig(
            "3.0.0-incubating",
            Some("the traversal with an appended VertexStep."),
            "Map the Vertex to its outgoing incident edges given the edge labels.",
            &[pm(String, "edgeLabels", "the edge labels to traverse")],
        )],
    ),
    (
        "outV",
        &[sig(
            "3.0.0-incubating",
            Some("the traversal with an appended EdgeVertexStep."),
            "Map the Edge to its outgoing/tail incident Vertex.",
            &[],
        )],
    ),
    (
        "pageRank",
        &[
            sig(
                "3.2.0-incubating",
                Some("the traversal with the appended PageRankVertexProgramStep."),
                "Calculates a PageRank over the graph using a 0.85 for the alpha value.",
                &[],
            ),
            sig(
                "3.2.0-incubating",
                Some("the traversal with the appended PageRankVertexProgramStep."),
                "Calculates a PageRank over the graph.",
                &[pd(Double, "alpha", "")],
            ),
        ],
    ),
    (
        "path",
        &[sig(
            "3.0.0-incubating",
            Some("the traversal with an appended PathStep."),
            "Map the Traverser to its Path history via Traverser.path().",
            &[],
        )],
    ),
    (
        "peerPressure",
        &[sig(
            "3.2.0-incubating",
            Some("the traversal with the appended PeerPressureVertexProgramStep."),
            "Executes a Peer Pressure community detection algorithm over the graph.",
            &[],
        )],
    ),
    (
        "profile",
        &[
            sig(
                "3.0.0-incubating",
                Some("the traversal with an appended ProfileSideEffectStep."),
                "Allows developers to examine statistical information about a traversal providing data like execution times, counts, etc.",
                &[],
            ),
            sig(
                "3.2.0-incubating",
                Some("the traversal with an appended ProfileSideEffectStep."),
                "Allows developers to examine statistical information about a traversal providing data like execution times, counts, etc.",
                &[pd(String, "sideEffectKey", "the name of the side-effect key within which to hold the profile object")],
            ),
        ],
    ),
    (
        "program",
        &[sig(
            "3.2.0-incubating",
            Some("the traversal with the appended ProgramVertexProgramStep."),
            "Executes an arbitrary VertexProgram over the graph.",
            &[pd(Any, "vertexProgram", "The vertex program to execute")],
        )],
    ),
    (
        "project",
        &[
            sig(
                "3.2.0-incubating",
                Some("the traversal with an appended ProjectStep."),
                "Projects the current object in the stream into a Map that is keyed by the provided labels.",
                &[pd(String, "projectKey", "the projected key")],
            ),
            sig(
                "3.2.0-incubating",
                Some("the traversal with an appended ProjectStep."),
                "Projects the current object in the stream into a Map that is keyed by the provided labels.",
                &[
                    pd(String, "projectKey", "the projected key"),
                    pm(String, "otherProjectKeys", "additional keys to be projected"),
                ],
            ),
        ],
    ),
    (
        "properties",
        &[sig(
            "3.0.0-incubating",
            Some("the traversal with an appended PropertiesStep."),
            "Map the Element to its associated properties given the provide property keys. If no property keys are provided, then all properties are emitted.",
            &[pm(String, "propertyKeys", "the properties to retrieve")],
        )],
    ),
    (
        "property",
        &[
            sig(
                "3.0.0-incubating",
                Some("the traversal with the last step modified to add a property."),
                "Sets the key and value of a Property. If the Element is a VertexProperty and the Graph supports it, meta properties can be set. Use of this method assumes that the VertexProperty.Cardinality is defaulted to null which means that the default cardinality for the Graph will be used.\n\nThis method is effectively calls property(org.apache.tinkerpop.gremlin.structure.VertexProperty.Cardinality, Object, Object, Object...) as property(null, key, value, keyValues.",
                &[
                    pd(Any, "key", "the key for the property"),
                    pd(Any, "value", "the value for the property"),
                ],
            ),
            sig(
                "3.0.0-incubating",
                Some("the traversal with the last step modified to add a property."),
                "Sets the key and value of a Property. If the Element is a VertexProperty and the Graph supports it, meta properties can be set. Use of this method assumes that the VertexProperty.Cardinality is defaulted to null which means that the default cardinality for the Graph will be used.\n\nThis method is effectively calls property(org.apache.tinkerpop.gremlin.structure.VertexProperty.Cardinality, Object, Object, Object...) as property(null, key, value, keyValues.",
                &[
                    pd(Any, "key", "the key for the property"),
                    pd(Any, "value", "the value for the property"),
                    pm(Any, "keyValues", "any meta properties to be assigned to this property"),
                ],
            ),
            sig(
                "3.0.0-incubating",
                Some("the traversal with the last step modified to add a property."),
                "Sets a Property value and related meta properties if supplied, if supported by the Graph and if the Element is a VertexProperty. This method is the long-hand version of property(Object, Object, Object...) with the difference that the VertexProperty.Cardinality can be supplied.\n\nGenerally speaking, this method will append an AddPropertyStep to the Traversal but when possible, this method will attempt to fold key/value pairs into an AddVertexStep, AddEdgeStep or AddVertexStartStep. This potential optimization can only happen if cardinality is not supplied and when meta-properties are not included.",
                &[
                    pd(Cardinality, "cardinality", "the specified cardinality of the property where null will allow the Graph to use its default settings"),
                    pd(Any, "key", "the key for the property"),
                    pd(Any, "value", "the value for the property"),
                ],
            ),
            sig(
                "3.0.0-incubating",
                Some("the traversal with the last step modified to add a property."),
                "Sets a Property value and related meta properties if supplied, if supported by the Graph and if the Element is a VertexProperty. This method is the long-hand version of property(Object, Object, Object...) with the difference that the VertexProperty.Cardinality can be supplied.\n\nGenerally speaking, this method will append an AddPropertyStep to the Traversal but when possible, this method will attempt to fold key/value pairs into an AddVertexStep, AddEdgeStep or AddVertexStartStep. This potential optimization can only happen if cardinality is not supplied and when meta-properties are not included.",
                &[
                    pd(Cardinality, "cardinality", "the specified cardinality of the property where null will allow the Graph to use its default settings"),
                    pd(Any, "key", "the key for the property"),
                    pd(Any, "value", "the value for the property"),
                    pm(Any, "keyValues", "any meta properties to be assigned to this property"),
                ],
            ),
        ],
    ),
    (
        "propertyMap",
        &[sig(
            "3.0.0-incubating",
            Some("the traversal with an appended PropertyMapStep."),
            "Map the Element to a Map of the properties key'd according to their Property.key(). If no property keys are provided, then all properties are retrieved.",
            &[pm(String, "propertyKeys", "the properties to retrieve")],
        )],
    ),
    (
        "range",
        &[
            sig(
                "3.0.0-incubating",
                Some("the traversal with an appended RangeGlobalStep."),
                "Filter the objects in the traversal by the number of them to pass through the stream. Those before the value of low do not pass through and those that exceed the value of high will end the iteration.",
                &[
                    pd(Long, "low", "the number at which to start allowing objects through the stream"),
                    pd(Long, "high", "the number at which to end the stream - use -1 to emit all remaining objects"),
                ],
            ),
            sig(
                "3.0.0-incubating",
                Some("the traversal with an appended RangeGlobalStep or RangeLocalStep depending on scope."),
                "Filter the objects in the traversal by the number of them to pass through the stream as constrained by the Scope. Those before the value of low do not pass through and those that exceed the value of high will end the iteration.",
                &[
                    pd(Scope, "scope", "the scope of how to apply the range"),
                    pd(Long, "low", "the number at which to start allowing objects through the stream"),
                    pd(Long, "high", "the number at which to end the stream - use -1 to emit all remaining objects"),
                ],
            ),
        ],
    ),
    (
        "read",
        &[sig(
            "3.4.0",
            Some("the traversal with the IoStep modulated to read."),
            "This step is technically a step modulator for the the GraphTraversalSource.io(String) step which instructs the step to perform a read with its given configuration.",
            &[],
        )],
    ),
    (
        "repeat",
        &[
            sig(
                "3.4.0",
                Some("the traversal with the appended RepeatStep."),
                "This step is used for looping over a traversal given some break predicate and with a specified loop name.",
                &[
                    pd(String, "repeatTraversal", "the traversal to repeat over"),
                    pd(Traversal, "loopName", "The name given to the loop"),
                ],
            ),
            sig(
                "3.0.0-incubating",
                Some("the traversal with the appended RepeatStep"),
                "This step is used for looping over a traversal given some break predicate.",
                &[pd(Traversal, "repeatTraversal", "the traversal to repeat over")],
            ),
        ],
    ),
    (
        "sack",
        &[
            sig(
                "3.0.0-incubating",
                Some("the traversal with an appended SackStep."),
                "Map the Traverser to its Traverser.sack() value.",
                &[],
            ),
            sig(
                "3.0.0-incubating",
                Some("the traversal with an appended SackStep."),
                "Map the Traverser to its Traverser.sack() value.",
                &[pd(Function, "sackOperator", "the operator to apply to the sack value")],
            ),
        ],
    ),
    (
        "sample",
        &[
            sig(
                "3.0.0-incubating",
                Some("the traversal with an appended SampleGlobalStep."),
                "Allow some specified number of objects to pass through the stream.",
                &[pd(Integer, "amountToSample", "the number of objects to allow")],
            ),
            sig(
                "3.0.0-incubating",
                Some("the traversal with an appended SampleGlobalStep or SampleLocalStep depending on the scope."),
                "Allow some specified number of objects to pass through the stream.",
                &[
                    pd(Scope, "scope", "the scope of how to apply the sample"),
                    pd(Integer, "amountToSample", "the number of objects to allow"),
                ],
            ),
        ],
    ),
    (
        "select",
        &[
            sig(
                "3.0.0-incubating",
                Some("the traversal with an appended SelectStep."),
                "Map the Traverser to the object specified by the selectKey and apply the Pop operation to it.",
                &[pd(Pop, "selectKey", "the key to project")],
            ),
            sig(
                "3.0.0-incubating",
                Some("the traversal with an appended SelectStep."),
                "Map the Traverser to a Map projection of sideEffect values, map values, and/or path values.",
                &[
                    pd(Pop, "pop", "if there are multiple objects referenced in the path, the Pop to use"),
                    pd(String, "selectKey1", "the first key to project"),
                    pd(String, "selectKey2", "the second key to project"),
                ],
            ),
            sig(
                "3.0.0-incubating",
                Some("the traversal with an appended SelectStep."),
                "Map the Traverser to a Map projection of sideEffect values, map values, and/or path values.",
                &[
                    pd(Pop, "pop", "if there are multiple objects referenced in the path, the Pop to use"),
                    pd(String, "selectKey1", "the first key to project"),
                    pd(String, "selectKey2", "the second key to project"),
                    pm(String, "otherSelectKeys", "the third+ keys to project"),
                ],
            ),
            sig(
                "3.3.3",
                Some("the traversal with an appended SelectStep."),
                "Map the Traverser to the object specified by the key returned by the keyTraversal and apply the Pop operation to it.",
                &[
                    pd(Pop, "pop", "if there are multiple objects referenced in the path, the Pop to use"),
                    pd(Traversal, "keyTraversal", "the traversal expression that selects the key to project"),
                ],
            ),
            sig(
                "3.0.0-incubating",
                Some("the traversal with an appended SelectStep."),
                "Map the Traverser to the object specified by the selectKey. Note that unlike other uses of select where there are multiple keys, this use of select with a single key does not produce a Map.",
                &[pd(String, "selectKey", "the key to project")],
            ),
            sig(
                "3.0.0-incubating",
                Some("the traversal with an appended SelectStep."),
                "Map the Traverser to a Map projection of sideEffect values, map values, and/or path values.",
                &[
                    pd(String, "selectKey1", "the first key to project"),
                    pd(String, "selectKey2", "the second key to project"),
                ],
            ),
            sig(
                "3.0.0-incubating",
                Some("the traversal with an appended SelectStep."),
                "Map the Traverser to a Map projection of sideEffect values, map values, and/or path values.",
                &[
                    pd(String, "selectKey1", "the first key to project"),
                    pd(String, "selectKey2", "the second key to project"),
                    pm(String, "otherSelectKeys", "the third+ keys to project"),
                ],
            ),
            sig(
                "3.3.3",
                Some("the traversal with an appended TraversalSelectStep."),
                "Map the Traverser to the object specified by the key returned by the keyTraversal. Note that unlike other uses of select where there are multiple keys, this use of select with a traversal does not produce a Map.",
                &[pd(Traversal, "keyTraversal", "the traversal expression that selects the key to project")],
            ),
        ],
    ),
    (
        "shortestPath",
        &[sig(
            "3.0.0-incubating",
            Some("the traversal with the appended ShortestPathVertexProgramStep."),
            "Executes a Shortest Path algorithm over the graph.",
            &[],
        )],
    ),
    (
        "sideEffect",
        &[
            sig(
                "3.0.0-incubating",
                Some("the traversal with an appended LambdaSideEffectStep."),
                "Perform some operation on the Traverser and pass it to the next step unmodified.",
                &[pd(Function, "consumer", "the operation to perform at this step in relation to the Traverser")],
            ),
            sig(
                "3.0.0-incubating",
                Some("the traversal with an appended TraversalSideEffectStep."),
                "Perform some operation on the Traverser and pass it to the next step unmodified.",
                &[pd(Traversal, "sideEffectTraversal", "the operation to perform at this step in relation to the Traverser")],
            ),
        ],
    ),
    (
        "simplePath",
        &[sig(
            "3.0.0-incubating",
            Some("the traversal with an appended PathFilterStep."),
            "Filter the E object if its Traverser.path() is not Path.isSimple().",
            &[],
        )],
    ),
    (
        "skip",
        &[
            sig(
                "3.3.0",
                Some("the traversal with an appended RangeGlobalStep."),
                "Filters out the first n objects in the traversal.",
                &[pd(Long, "skip", "the number of objects to skip")],
            ),
            sig(
                "3.3.0",
                Some("the traversal with an appended RangeGlobalStep or RangeLocalStep depending on scope."),
                "Filters out the first n objects in the traversal.",
                &[
                    pd(Scope, "scope", "the scope of how to apply the tail"),
                    pd(Long, "skip", "the number of objects to skip"),
                ],
            ),
        ],
    ),
    (
        "store",
        &[sig(
            "3.0.0-incubating",
            Some("the traversal with an appended StoreStep."),
            "**Deprecated.** As of release 3.4.3, replaced by aggregate(Scope, String) using Scope.local.\nLazily aggregates objects in the stream into a side-effect collection.",
            &[pd(String, "sideEffectKey", "the name of the side-effect key that will hold the aggregate")],
        )],
    ),
    (
        "subgraph",
        &[sig(
            "3.0.0-incubating",
            Some("the traversal with an appended SubgraphStep."),
            "Extracts a portion of the graph being traversed into a Graph object held in the specified side-effect key.",
            &[pd(String, "sideEffectKey", "the name of the side-effect key that will hold the subgraph")],
        )],
    ),
    (
        "sum",
        &[
            sig(
                "3.0.0-incubating",
                Some("the traversal with an appended SumGlobalStep."),
                "Map the traversal stream to its reduction as a sum of the Traverser.get() values multiplied by their Traverser.bulk() (i.e. sum the traverser values up to this point).",
                &[],
            ),
            sig(
                "3.0.0-incubating",
                Some("the traversal with an appended SumGlobalStep or SumLocalStep depending on the Scope."),
                "Map the traversal stream to its reduction as a sum of the Traverser.get() values multiplied by their Traverser.bulk() given the specified Scope (i.e. sum the traverser values up to this point).",
                &[pd(Scope, "scope", "the scope of how to apply the sum")],
            ),
        ],
    ),
    (
        "tail",
        &[
            sig(
                "3.0.0-incubating",
                Some("the traversal with an appended TailGlobalStep."),
                "Filters the objects in the traversal emitted as being last objects in the stream. In this case, only the last object will be returned.",
                &[],
            ),
            sig(
                "3.0.0-incubating",
                Some("the traversal with an appended TailGlobalStep."),
                "Filters the objects in the traversal emitted as being last objects in the stream. In this case, only the last n objects will be returned as defined by the limit.",
                &[pd(Long, "limit", "the number at which to end the stream")],
            ),
            sig(
                "3.0.0-incubating",
                Some("the traversal with an appended TailGlobalStep or TailLocalStep depending on scope."),
                "Filters the objects in the traversal emitted as being last objects in the stream given the Scope. In this case, only the last object in the stream will be returned.",
                &[pd(Scope, "scope", "the scope of how to apply the tail")],
            ),
            sig(
                "3.0.0-incubating",
                Some("the traversal with an appended TailGlobalStep or TailLocalStep depending on scope."),
                "Filters the objects in the traversal emitted as being last objects in the stream given the Scope. In this case, only the last n objects will be returned as defined by the limit.",
                &[
                    pd(Scope, "scope", "the scope of how to apply the tail"),
                    pd(Long, "limit", "the number at which to end the stream"),
                ],
            ),
        ],
    ),
    (
        "timeLimit",
        &[sig(
            "3.0.0-incubating",
            Some("the traversal with an appended TimeLimitStep."),
            "Once the first Traverser hits this step, a count down is started. Once the time limit is up, all remaining traversers are filtered out.",
            &[pd(Long, "timeLimit", "the count down time")],
        )],
    ),
    (
        "times",
        &[sig(
            "3.0.0-incubating",
            Some("the traversal with the appended RepeatStep."),
            "Modifies a repeat(Traversal) to specify how many loops should occur before exiting.",
            &[pd(Integer, "maxLoops", "the number of loops to execute prior to exiting")],
        )],
    ),
    (
        "to",
        &[
            sig(
                "3.0.0-incubating",
                Some("the traversal with an appended VertexStep."),
                "Map the Vertex to its adjacent vertices given a direction and edge labels.",
                &[
                    pd(Direction, "direction", "the direction to traverse from the current vertex"),
                    pm(String, "edgeLabels", "the edge labels to traverse"),
                ],
            ),
            sig(
                "3.1.0-incubating",
                Some("the traversal with the modified FromToModulating step."),
                "Provide to()-modulation to respective steps.",
                &[pd(String, "toStepLabel", "the step label to modulate to")],
            ),
            sig(
                "3.1.0-incubating",
                Some("the traversal with the modified AddEdgeStep."),
                "When used as a modifier to addE(String) this method specifies the traversal to use for selecting the incoming vertex of the newly added Edge.",
                &[pd(Traversal, "toVertex", "the traversal for selecting the incoming vertex")],
            ),
        ],
    ),
    (
        "toE",
        &[sig(
            "3.0.0-incubating",
            Some("the traversal with an appended VertexStep."),
            "Map the Vertex to its incident edges given the direction and edge labels.",
            &[
                pd(Direction, "direction", "the direction to traverse from the current vertex"),
                pm(String, "edgeLabels", "the edge labels to traverse"),
            ],
        )],
    ),
    (
        "toV",
        &[sig(
            "3.0.0-incubating",
            Some("the traversal with an appended EdgeVertexStep."),
            "Map the Edge to its incident vertices given the direction.",
            &[pd(Direction, "direction", "the direction to traverser from the current edge")],
        )],
    ),
    (
        "tree",
        &[
            sig(
                "3.0.0-incubating",
                Some("the traversal with an appended TreeStep."),
                "Aggregates the emanating paths into a Tree data structure.",
                &[],
            ),
            sig(
                "3.0.0-incubating",
                Some("the traversal with an appended TreeStep."),
                "Aggregates the emanating paths into a Tree data structure.",
                &[pd(String, "sideEffectKey", "the name of the side-effect key that will hold the tree")],
            ),
        ],
    ),
    (
        "unfold",
        &[sig(
            "3.0.0-incubating",
            Some("the traversal with an appended UnfoldStep."),
            "Unrolls a Iterator, Iterable or Map into a linear form or simply emits the object if it is not one of those types.",
            &[],
        )],
    ),
    (
        "union",
        &[sig(
            "3.0.0-incubating",
            Some("the traversal with the appended UnionStep."),
            "Merges the results of an arbitrary number of traversals.",
            &[pm(Traversal, "unionTraversals", "the traversals to merge")],
        )],
    ),
    (
        "until",
        &[
            sig(
                "3.0.0-incubating",
                Some("the traversal with the appended RepeatStep."),
                "Modifies a repeat(Traversal) to determine when the loop should exit.",
                &[pd(Predicate, "untilPredicate", "the predicate that determines when the loop exits")],
            ),
            sig(
                "3.0.0-incubating",
                Some("the traversal with the appended RepeatStep."),
                "Modifies a repeat(Traversal) to determine when the loop should exit.",
                &[pd(Traversal, "untilTraversal", "the traversal that determines when the loop exits")],
            ),
        ],
    ),
    (
        "V",
        &[
            sig(
                "3.1.0-incubating",
                Some("the traversal with an appended GraphStep."),
                "A V step is usually used to start a traversal but it may also be used mid-traversal.",
                &[],
            ),
            sig(
                "3.1.0-incubating",
                Some("the traversal with an appended GraphStep."),
                "A V step is usually used to start a traversal but it may also be used mid-traversal.",
                &[pm(Any, "vertexIdsOrElements", "vertices to inject into the traversal")],
            ),
        ],
    ),
    (
        "value",
        &[sig(
            "3.0.0-incubating",
            Some("the traversal with an appended PropertyValueStep."),
            "Map the Property to its Property.value().",
            &[],
        )],
    ),
    (
        "valueMap",
        &[
            sig(
                "3.0.0-incubating",
                Some("the traversal with an appended PropertyMapStep."),
                "**Deprecated.** As of release 3.4.0, deprecated in favor of valueMap(String...) in conjunction with with(String, Object) or simple prefer elementMap(String...).\nMap the Element to a Map of the property values key'd according to their Property.key(). If no property keys are provided, then all property values are retrieved.",
                &[
                    pd(Boolean, "includeTokens", "whether to include T tokens in the emitted map"),
                    pm(String, "propertyKeys", "the properties to retrieve"),
                ],
            ),
            sig(
                "3.0.0-incubating",
                Some("the traversal with an appended PropertyMapStep."),
                "Map the Element to a Map of the property values key'd according to their Property.key(). If no property keys are provided, then all property values are retrieved.",
                &[pm(String, "propertyKeys", "the properties to retrieve")],
            ),
        ],
    ),
    (
        "values",
        &[sig(
            "3.0.0-incubating",
            Some("the traversal with an appended PropertiesStep."),
            "Map the Element to the values of the associated properties given the provide property keys. If no property keys are provided, then all property values are emitted.",
            &[pm(String, "propertyKeys", "the properties to retrieve their value from")],
        )],
    ),
    (
        "where",
        &[
            sig(
                "3.0.0-incubating",
                Some("the traversal with an appended WherePredicateStep."),
                "Filters the current object based on the object itself or the path history.",
                &[pd(Predicate, "predicate", "the filter to apply")],
            ),
            sig(
                "3.0.0-incubating",
                Some("the traversal with an appended WherePredicateStep."),
                "Filters the current object based on the object itself or the path history.",
                &[
                    pd(String, "startKey", "the key containing the object to filter"),
                    pd(Predicate, "predicate", "the filter to apply"),
                ],
            ),
            sig(
                "3.0.0-incubating",
                Some("the traversal with an appended WherePredicateStep."),
                "Filters the current object based on the object itself or the path history.",
                &[pd(Traversal, "whereTraversal", "the filter to apply")],
            ),
        ],
    ),
    (
        "with",
        &[
            sig(
                "3.4.0",
                Some("the traversal with a modulated step."),
                "Provides a configuration to a step in the form of a key which is the same as with(key, true). The key of the configuration must be step specific and therefore a configuration could be supplied that is not known to be valid until execution.",
                &[pd(String, "key", "the key of the configuration to apply to a step")],
            ),
            sig(
                "3.4.0",
                Some("the traversal with a modulated step."),
                "Provides a configuration to a step in the form of a key and value pair. The key of the configuration must be step specific and therefore a configuration could be supplied that is not known to be valid until execution.",
                &[
                    pd(String, "key", "the key of the configuration to apply to a step"),
                    pd(Any, "value", "the value of the configuration to apply to a step"),
                ],
            ),
        ],
    ),
    (
        "write",
        &[sig(
            "3.4.0",
            Some("the traversal with the IoStep modulated to write"),
            "This step is technically a step modulator for the the GraphTraversalSource.io(String) step which instructs the step to perform a write with its given configuration.",
            &[],
        )],
    ),
];
